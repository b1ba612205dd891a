use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use shared::{ReportFrequency, ReportSetting, UpdateReportSettingRequest};

#[derive(Properties, PartialEq)]
pub struct ScheduleReportDrawerProps {
    pub is_open: bool,
    /// Current setting, when the server has reported one
    pub current: Option<ReportSetting>,
    pub on_save: Callback<UpdateReportSettingRequest>,
    pub on_close: Callback<()>,
}

#[function_component(ScheduleReportDrawer)]
pub fn schedule_report_drawer(props: &ScheduleReportDrawerProps) -> Html {
    let is_enabled = use_state(|| true);
    let frequency = use_state(|| ReportFrequency::Monthly);

    // Reset the form from the current setting when the drawer opens
    use_effect_with((props.is_open, props.current.clone()), {
        let is_enabled = is_enabled.clone();
        let frequency = frequency.clone();

        move |(is_open, current)| {
            if *is_open {
                if let Some(setting) = current {
                    is_enabled.set(setting.is_enabled);
                    frequency.set(setting.frequency);
                }
            }
            || ()
        }
    });

    let on_enabled_change = {
        let is_enabled = is_enabled.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            is_enabled.set(input.checked());
        })
    };

    let on_frequency_change = {
        let frequency = frequency.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ReportFrequency>() {
                Ok(value) => frequency.set(value),
                Err(err) => gloo::console::warn!("Ignoring frequency:", err),
            }
        })
    };

    let on_submit = {
        let is_enabled = is_enabled.clone();
        let frequency = frequency.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(UpdateReportSettingRequest {
                is_enabled: Some(*is_enabled),
                frequency: Some(*frequency),
            });
            on_close.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <aside class="drawer">
            <h2>{"Schedule reports"}</h2>
            <form onsubmit={on_submit}>
                <label class="checkbox">
                    <input type="checkbox" checked={*is_enabled} onchange={on_enabled_change} />
                    {"Generate reports automatically"}
                </label>
                <label>
                    {"Frequency"}
                    <select onchange={on_frequency_change} disabled={!*is_enabled}>
                        <option value={ReportFrequency::Monthly.to_string()} selected={*frequency == ReportFrequency::Monthly}>
                            {"Monthly"}
                        </option>
                        <option value={ReportFrequency::Weekly.to_string()} selected={*frequency == ReportFrequency::Weekly}>
                            {"Weekly"}
                        </option>
                    </select>
                </label>
                {if let Some(next) = props.current.as_ref().and_then(|s| s.next_report_date.as_ref()) {
                    html! { <p class="hint">{format!("Next report: {}", crate::components::report_table::format_created_at(next))}</p> }
                } else {
                    html! {}
                }}
                <div class="drawer-actions">
                    <button type="button" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="primary">{"Save"}</button>
                </div>
            </form>
        </aside>
    }
}
