use chrono::DateTime;
use yew::prelude::*;
use shared::{Report, ReportStatus};

#[derive(Properties, PartialEq)]
pub struct ReportTableProps {
    pub reports: Vec<Report>,
    pub loading: bool,
    pub page_number: u32,
    pub total_pages: u64,
    pub total_count: u64,
    pub on_page_change: Callback<u32>,
}

#[function_component(ReportTable)]
pub fn report_table(props: &ReportTableProps) -> Html {
    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        let page_number = props.page_number;
        Callback::from(move |_: MouseEvent| on_page_change.emit(page_number.saturating_sub(1)))
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let page_number = props.page_number;
        Callback::from(move |_: MouseEvent| on_page_change.emit(page_number + 1))
    };

    if props.loading && props.reports.is_empty() {
        return html! { <div class="loading">{"Loading reports..."}</div> };
    }

    if props.reports.is_empty() {
        return html! {
            <div class="empty-state">{"No reports yet. Generate one to get started."}</div>
        };
    }

    html! {
        <div class="report-table-container">
            <table class="report-table">
                <thead>
                    <tr>
                        <th>{"Period"}</th>
                        <th>{"Status"}</th>
                        <th>{"Income"}</th>
                        <th>{"Expenses"}</th>
                        <th>{"Balance"}</th>
                        <th>{"Savings rate"}</th>
                        <th>{"Top category"}</th>
                        <th>{"Created"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.reports.iter().map(|report| html! {
                        <tr key={report.id.clone()}>
                            <td>{&report.period}</td>
                            <td class={status_class(report.status)}>{status_label(report.status)}</td>
                            <td>{format_currency(report.summary.income)}</td>
                            <td>{format_currency(report.summary.expenses)}</td>
                            <td class={if report.summary.balance < 0.0 { "negative" } else { "positive" }}>
                                {format_currency(report.summary.balance)}
                            </td>
                            <td>{format!("{:.1}%", report.summary.savings_rate)}</td>
                            <td>
                                {report.summary.top_categories.first()
                                    .map(|category| format!("{} ({:.0}%)", category.name, category.percentage))
                                    .unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td>{format_created_at(&report.created_at)}</td>
                        </tr>
                    })}
                </tbody>
            </table>
            <div class="pagination">
                <button onclick={on_previous} disabled={props.page_number <= 1}>{"Previous"}</button>
                <span>{format!("Page {} of {} ({} reports)", props.page_number, props.total_pages.max(1), props.total_count)}</span>
                <button onclick={on_next} disabled={u64::from(props.page_number) >= props.total_pages}>{"Next"}</button>
            </div>
        </div>
    }
}

fn status_label(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Generated => "Generated",
        ReportStatus::NoActivity => "No activity",
    }
}

fn status_class(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Generated => "status generated",
        ReportStatus::NoActivity => "status no-activity",
    }
}

/// Format an amount as dollars with a leading sign for negatives
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Render an RFC 3339 timestamp as e.g. "Mar 5, 2024"; unparsable input is shown as-is
pub fn format_created_at(rfc3339: &str) -> String {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| rfc3339.to_string())
}
