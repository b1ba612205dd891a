use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    generate_report_form::GenerateReportForm, report_table::ReportTable,
    schedule_report_drawer::ScheduleReportDrawer,
};
use hooks::use_reports::use_reports;
use services::{api::ApiClient, config::FrontendConfig};

#[function_component(ReportsPage)]
fn reports_page() -> Html {
    let config = use_context::<FrontendConfig>().unwrap_or_default();
    let api_client = use_memo(config, |config| ApiClient::new(config.clone()));
    let reports = use_reports(&api_client);
    let drawer_open = use_state(|| false);

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };

    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: ()| drawer_open.set(false))
    };

    let on_refresh = {
        let refresh = reports.actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let state = &reports.state;

    html! {
        <div class="reports-page">
            <header class="header">
                <h1>{"Financial Reports"}</h1>
                <div class="header-actions">
                    <button onclick={on_refresh} disabled={state.loading}>{"Refresh"}</button>
                    <button onclick={open_drawer}>{"Schedule"}</button>
                </div>
            </header>

            <GenerateReportForm
                generating={state.generating}
                on_generate={reports.actions.generate.clone()}
            />

            {if let Some(error) = &state.error {
                html! { <div class="error-message">{error}</div> }
            } else if let Some(notice) = &state.notice {
                html! { <div class="success-message">{notice}</div> }
            } else {
                html! {}
            }}

            <ReportTable
                reports={state.reports.clone()}
                loading={state.loading}
                page_number={state.page_number}
                total_pages={state.total_pages}
                total_count={state.total_count}
                on_page_change={reports.actions.go_to_page.clone()}
            />

            <ScheduleReportDrawer
                is_open={*drawer_open}
                current={state.report_setting.clone()}
                on_save={reports.actions.update_setting.clone()}
                on_close={close_drawer}
            />
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = FrontendConfig::from_build_env();
    gloo::console::log!("Reports API:", config.api_base_url.clone());

    html! {
        <ContextProvider<FrontendConfig> context={config}>
            <ReportsPage />
        </ContextProvider<FrontendConfig>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
