use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    ErrorResponse, GenerateReportResponse, GetAllReportsResponse, UpdateReportSettingRequest,
    UpdateReportSettingResponse,
};

use crate::services::config::FrontendConfig;

const USER_ID_HEADER: &str = "X-User-Id";

/// API client for communicating with the reports backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: FrontendConfig,
}

impl ApiClient {
    pub fn new(config: FrontendConfig) -> Self {
        Self { config }
    }

    /// Fetch one page of the report history
    pub async fn get_all_reports(
        &self,
        page_number: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<GetAllReportsResponse, String> {
        let request = self
            .get("/report/all")
            .query(report_list_params(page_number, page_size));
        send(request).await
    }

    /// Change the report schedule
    pub async fn update_report_setting(
        &self,
        request: UpdateReportSettingRequest,
    ) -> Result<UpdateReportSettingResponse, String> {
        let url = self.url("/report/update-setting");
        let request = Request::put(&url)
            .header(USER_ID_HEADER, &self.config.user_id)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => read_response(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Generate a report; empty dates are left for the server to default
    pub async fn generate_report(&self, from: &str, to: &str) -> Result<GenerateReportResponse, String> {
        let request = self.get("/report/generate").query(generate_params(from, to));
        send(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).header(USER_ID_HEADER, &self.config.user_id)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
    match request.send().await {
        Ok(response) => read_response(response).await,
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(error_message(status, &body))
    }
}

/// Query pairs for the history endpoint; absent values are omitted
pub fn report_list_params(page_number: Option<u32>, page_size: Option<u32>) -> Vec<(&'static str, String)> {
    [("pageNumber", page_number), ("pageSize", page_size)]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v.to_string())))
        .collect()
}

/// Query pairs for the generate endpoint; blank dates are omitted
pub fn generate_params(from: &str, to: &str) -> Vec<(&'static str, String)> {
    [("from", from), ("to", to)]
        .into_iter()
        .map(|(key, value)| (key, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect()
}

/// Human-readable message for a failed request
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(error) if error.errors.is_empty() => error.message,
        Ok(error) => {
            let details: Vec<String> = error
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            format!("{} ({})", error.message, details.join("; "))
        }
        Err(_) if body.trim().is_empty() => format!("Server error {}", status),
        Err(_) => format!("Server error {}: {}", status, body),
    }
}
