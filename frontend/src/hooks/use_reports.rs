use std::rc::Rc;

use yew::prelude::*;
use shared::{GetAllReportsResponse, Report, ReportSetting, UpdateReportSettingRequest};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportsState {
    pub reports: Vec<Report>,
    pub total_count: u64,
    pub total_pages: u64,
    pub page_number: u32,
    pub loading: bool,
    pub generating: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Setting as last returned by the server, if known
    pub report_setting: Option<ReportSetting>,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            total_count: 0,
            total_pages: 0,
            page_number: 1,
            loading: true,
            generating: false,
            error: None,
            notice: None,
            report_setting: None,
        }
    }
}

pub enum ReportsAction {
    FetchStarted,
    PageLoaded(GetAllReportsResponse),
    GenerateStarted,
    Generated { notice: String, report_setting: ReportSetting },
    SettingUpdated {
        notice: String,
        request: UpdateReportSettingRequest,
    },
    Failed(String),
}

impl Reducible for ReportsState {
    type Action = ReportsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ReportsAction::FetchStarted => next.loading = true,
            ReportsAction::PageLoaded(page) => {
                next.reports = page.reports;
                next.total_count = page.total_count;
                next.total_pages = page.total_pages;
                next.page_number = page.page_number;
                next.loading = false;
            }
            ReportsAction::GenerateStarted => {
                next.generating = true;
                next.error = None;
                next.notice = None;
            }
            ReportsAction::Generated { notice, report_setting } => {
                next.generating = false;
                next.notice = Some(notice);
                next.report_setting = Some(report_setting);
            }
            ReportsAction::SettingUpdated { notice, request } => {
                next.error = None;
                next.notice = Some(notice);
                if let Some(setting) = next.report_setting.as_mut() {
                    apply_setting_update(setting, &request);
                }
            }
            ReportsAction::Failed(error) => {
                next.loading = false;
                next.generating = false;
                next.error = Some(error);
            }
        }
        Rc::new(next)
    }
}

/// Mirror a saved update locally so the schedule drawer reopens with it.
///
/// The server does not echo the new schedule, so a next date that may have
/// moved is dropped until the setting is fetched again.
fn apply_setting_update(setting: &mut ReportSetting, request: &UpdateReportSettingRequest) {
    let frequency_changed = request.frequency.is_some_and(|f| f != setting.frequency);

    if let Some(is_enabled) = request.is_enabled {
        setting.is_enabled = is_enabled;
    }
    if let Some(frequency) = request.frequency {
        setting.frequency = frequency;
    }
    if !setting.is_enabled || frequency_changed {
        setting.next_report_date = None;
    }
}

/// Date range typed into the generate form; blank means server default
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerateRange {
    pub from: String,
    pub to: String,
}

#[derive(Clone, PartialEq)]
pub struct UseReportsActions {
    pub refresh: Callback<()>,
    pub go_to_page: Callback<u32>,
    pub generate: Callback<GenerateRange>,
    pub update_setting: Callback<UpdateReportSettingRequest>,
}

pub struct UseReportsResult {
    pub state: ReportsState,
    pub actions: UseReportsActions,
}

/// Report history plus the mutations that change it; every successful
/// mutation refetches the current page
#[hook]
pub fn use_reports(api_client: &ApiClient) -> UseReportsResult {
    let state = use_reducer(ReportsState::default);
    let current_page = use_mut_ref(|| 1u32);

    let fetch_page = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();

        use_callback((), move |page: u32, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();

            spawn_local(async move {
                dispatcher.dispatch(ReportsAction::FetchStarted);

                match api_client.get_all_reports(Some(page), None).await {
                    Ok(data) => dispatcher.dispatch(ReportsAction::PageLoaded(data)),
                    Err(e) => {
                        gloo::console::error!("Failed to fetch reports:", e.clone());
                        dispatcher.dispatch(ReportsAction::Failed(e));
                    }
                }
            });
        })
    };

    // Load the first page on mount
    use_effect_with((), {
        let fetch_page = fetch_page.clone();
        move |_| {
            fetch_page.emit(1);
            || ()
        }
    });

    let refresh = {
        let fetch_page = fetch_page.clone();
        let current_page = current_page.clone();
        use_callback((), move |_, _| fetch_page.emit(*current_page.borrow()))
    };

    let go_to_page = {
        let fetch_page = fetch_page.clone();
        let current_page = current_page.clone();
        use_callback((), move |page: u32, _| {
            let page = page.max(1);
            *current_page.borrow_mut() = page;
            fetch_page.emit(page);
        })
    };

    let generate = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let refresh = refresh.clone();

        use_callback((), move |range: GenerateRange, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                dispatcher.dispatch(ReportsAction::GenerateStarted);

                match api_client.generate_report(&range.from, &range.to).await {
                    Ok(response) => {
                        dispatcher.dispatch(ReportsAction::Generated {
                            notice: format!("{} for {}", response.message, response.report.period),
                            report_setting: response.report_setting,
                        });
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to generate report:", e.clone());
                        dispatcher.dispatch(ReportsAction::Failed(e));
                    }
                }
            });
        })
    };

    let update_setting = {
        let api_client = api_client.clone();
        let dispatcher = state.dispatcher();
        let refresh = refresh.clone();

        use_callback((), move |request: UpdateReportSettingRequest, _| {
            let api_client = api_client.clone();
            let dispatcher = dispatcher.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.update_report_setting(request.clone()).await {
                    Ok(response) => {
                        dispatcher.dispatch(ReportsAction::SettingUpdated {
                            notice: response.message,
                            request,
                        });
                        refresh.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to update report setting:", e.clone());
                        dispatcher.dispatch(ReportsAction::Failed(e));
                    }
                }
            });
        })
    };

    UseReportsResult {
        state: (*state).clone(),
        actions: UseReportsActions {
            refresh,
            go_to_page,
            generate,
            update_setting,
        },
    }
}
