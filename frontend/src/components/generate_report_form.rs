use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::hooks::use_reports::GenerateRange;

#[derive(Properties, PartialEq)]
pub struct GenerateReportFormProps {
    pub generating: bool,
    pub on_generate: Callback<GenerateRange>,
}

/// Optional from/to dates; leaving both blank covers the last 30 days
#[function_component(GenerateReportForm)]
pub fn generate_report_form(props: &GenerateReportFormProps) -> Html {
    let from = use_state(String::new);
    let to = use_state(String::new);

    let on_from_change = {
        let from = from.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            from.set(input.value());
        })
    };

    let on_to_change = {
        let to = to.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            to.set(input.value());
        })
    };

    let on_submit = {
        let from = from.clone();
        let to = to.clone();
        let on_generate = props.on_generate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_generate.emit(GenerateRange {
                from: (*from).clone(),
                to: (*to).clone(),
            });
        })
    };

    html! {
        <form class="generate-form" onsubmit={on_submit}>
            <label>
                {"From"}
                <input type="date" value={(*from).clone()} onchange={on_from_change} />
            </label>
            <label>
                {"To"}
                <input type="date" value={(*to).clone()} onchange={on_to_change} />
            </label>
            <button type="submit" class="primary" disabled={props.generating}>
                {if props.generating { "Generating..." } else { "Generate now" }}
            </button>
        </form>
    }
}
