//! # REST API for Reports
//!
//! Endpoints for listing report history, changing report settings and
//! generating reports.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;
use tracing::info;

use crate::domain::{
    commands::{
        reports::{GenerateReportCommand, ReportListQuery},
        settings::UpdateReportSettingCommand,
    },
    Pagination, ReportRange,
};
use crate::io::rest::{
    auth::CurrentUser,
    error::ApiError,
    mappers::report_mapper::{ReportMapper, ReportSettingMapper},
};
use crate::AppState;
use shared::{
    GenerateReportResponse, GetAllReportsResponse, UpdateReportSettingRequest,
    UpdateReportSettingResponse,
};

/// Create a router for report related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(get_all_reports))
        .route("/update-setting", put(update_report_setting))
        .route("/generate", get(generate_report))
}

/// Query parameters for the report history endpoint, kept as raw strings so
/// that malformed values fall back to defaults instead of failing extraction
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportListParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

/// Query parameters for the report generation endpoint
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReportParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// List the caller's reports, newest first
pub async fn get_all_reports(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    params: Option<Query<ReportListParams>>,
) -> Result<Json<GetAllReportsResponse>, ApiError> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    info!("GET /api/report/all - user: {}, params: {:?}", user_id, params);

    let query = ReportListQuery {
        user_id,
        pagination: Pagination::from_raw(params.page_size.as_deref(), params.page_number.as_deref()),
    };

    let result = state.report_service.get_all_reports(query).await?;

    Ok(Json(GetAllReportsResponse {
        message: "Reports history fetched successfully".to_string(),
        reports: result.reports.into_iter().map(ReportMapper::to_dto).collect(),
        total_count: result.total_count,
        total_pages: result.total_pages,
        page_size: result.pagination.page_size(),
        page_number: result.pagination.page_number(),
    }))
}

/// Update the caller's report generation settings
pub async fn update_report_setting(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    payload: Result<Json<UpdateReportSettingRequest>, JsonRejection>,
) -> Result<Json<UpdateReportSettingResponse>, ApiError> {
    let Json(request) = payload?;
    info!("PUT /api/report/update-setting - user: {}, request: {:?}", user_id, request);

    let command = UpdateReportSettingCommand {
        user_id,
        is_enabled: request.is_enabled,
        frequency: request.frequency,
    };

    let result = state.report_setting_service.update_report_setting(command).await?;

    Ok(Json(UpdateReportSettingResponse {
        message: result.success_message,
    }))
}

/// Generate a report over `from`..`to`; bad or missing dates fall back to
/// the last 30 days
pub async fn generate_report(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    params: Option<Query<GenerateReportParams>>,
) -> Result<Json<GenerateReportResponse>, ApiError> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    info!("GET /api/report/generate - user: {}, params: {:?}", user_id, params);

    let command = GenerateReportCommand {
        user_id,
        range: ReportRange::resolve(params.from.as_deref(), params.to.as_deref()),
    };

    let result = state.report_service.generate_report(command).await?;

    Ok(Json(GenerateReportResponse {
        message: "Report generated successfully".to_string(),
        report: ReportMapper::to_dto(result.report),
        report_setting: ReportSettingMapper::to_dto(result.report_setting),
    }))
}

#[cfg(test)]
mod tests {
    use crate::config::BackendConfig;
    use crate::storage::DbConnection;
    use crate::{build_app_state, create_router};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde::de::DeserializeOwned;
    use shared::{
        CreateTransactionRequest, ErrorResponse, GenerateReportResponse, GetAllReportsResponse,
        ReportFrequency, ReportStatus, TransactionType, UpdateReportSettingResponse,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn setup_test_router() -> Router {
        let db = Arc::new(DbConnection::init_test().await.expect("Failed to init test DB"));
        create_router(build_app_state(db), &BackendConfig::default())
    }

    fn get(uri: &str, user_id: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(Method::GET).uri(uri);
        if let Some(user_id) = user_id {
            builder = builder.header("X-User-Id", user_id);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn json_request(method: Method, uri: &str, user_id: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("X-User-Id", user_id)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send<T: DeserializeOwned>(app: &Router, request: Request<Body>) -> (StatusCode, T) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_all_reports_empty_with_defaults() {
        let app = setup_test_router().await;

        let (status, body): (_, GetAllReportsResponse) =
            send(&app, get("/api/report/all?pageSize=abc&pageNumber=0", Some("alice"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Reports history fetched successfully");
        assert!(body.reports.is_empty());
        assert_eq!(body.page_size, 20);
        assert_eq!(body.page_number, 1);
        assert_eq!(body.total_pages, 0);
    }

    #[tokio::test]
    async fn test_missing_user_is_unauthorized() {
        let app = setup_test_router().await;

        let (status, body): (_, ErrorResponse) = send(&app, get("/api/report/all", None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.message, "Missing or empty X-User-Id header");
    }

    #[tokio::test]
    async fn test_generate_report_swaps_inverted_range() {
        let app = setup_test_router().await;

        let (status, body): (_, GenerateReportResponse) = send(
            &app,
            get("/api/report/generate?from=2024-01-10&to=2024-01-01", Some("alice")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Report generated successfully");
        assert_eq!(body.report.from_date, "2024-01-01T00:00:00.000Z");
        assert_eq!(body.report.to_date, "2024-01-10T00:00:00.000Z");
        assert_eq!(body.report.status, ReportStatus::NoActivity);
        assert_eq!(body.report_setting.user_id, "alice");
        assert!(body.report_setting.last_generated_date.is_some());
    }

    #[tokio::test]
    async fn test_generate_report_with_garbage_dates_succeeds() {
        let app = setup_test_router().await;

        let (status, body): (_, GenerateReportResponse) = send(
            &app,
            get("/api/report/generate?from=garbage&to=also-garbage", Some("alice")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.report.from_date < body.report.to_date);
    }

    #[tokio::test]
    async fn test_generate_then_list() {
        let app = setup_test_router().await;

        let transaction = CreateTransactionRequest {
            title: "Salary".to_string(),
            amount: 1000.0,
            category: "salary".to_string(),
            transaction_type: TransactionType::Income,
            date: Some("2024-03-01".to_string()),
        };
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/transaction/create",
                "alice",
                serde_json::to_string(&transaction).unwrap(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let (status, generated): (_, GenerateReportResponse) =
            send(&app, get("/api/report/generate?to=2024-03-15", Some("alice"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(generated.report.from_date, "2024-02-14T00:00:00.000Z");
        assert_eq!(generated.report.status, ReportStatus::Generated);
        assert_eq!(generated.report.summary.income, 1000.0);

        let (status, listed): (_, GetAllReportsResponse) =
            send(&app, get("/api/report/all", Some("alice"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.total_count, 1);
        assert_eq!(listed.total_pages, 1);
        assert_eq!(listed.reports, vec![generated.report]);

        let (_, other_user): (_, GetAllReportsResponse) =
            send(&app, get("/api/report/all", Some("bob"))).await;
        assert!(other_user.reports.is_empty());
    }

    #[tokio::test]
    async fn test_update_setting_then_generate_reflects_it() {
        let app = setup_test_router().await;

        let (status, body): (_, UpdateReportSettingResponse) = send(
            &app,
            json_request(
                Method::PUT,
                "/api/report/update-setting",
                "alice",
                r#"{"isEnabled": false, "frequency": "WEEKLY"}"#.to_string(),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Reports setting updated successfully");

        let (_, generated): (_, GenerateReportResponse) =
            send(&app, get("/api/report/generate", Some("alice"))).await;
        assert!(!generated.report_setting.is_enabled);
        assert_eq!(generated.report_setting.frequency, ReportFrequency::Weekly);
        assert_eq!(generated.report_setting.next_report_date, None);
    }

    #[tokio::test]
    async fn test_update_setting_rejects_schema_violations() {
        let app = setup_test_router().await;

        for body in [
            r#"{"isEnabled": "yes"}"#,
            r#"{"frequency": "DAILY"}"#,
            r#"{"isEnabled": true, "unexpected": 1}"#,
            r#"not json"#,
        ] {
            let (status, error): (_, ErrorResponse) = send(
                &app,
                json_request(Method::PUT, "/api/report/update-setting", "alice", body.to_string()),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
            assert_eq!(error.message, "Invalid request body");
            assert_eq!(error.errors[0].field, "body");
        }
    }

    #[tokio::test]
    async fn test_update_setting_rejects_empty_update() {
        let app = setup_test_router().await;

        let (status, error): (_, ErrorResponse) = send(
            &app,
            json_request(Method::PUT, "/api/report/update-setting", "alice", "{}".to_string()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Validation failed");
    }

    #[tokio::test]
    async fn test_unknown_route_is_structured_not_found() {
        let app = setup_test_router().await;

        let (status, error): (_, ErrorResponse) =
            send(&app, get("/api/report/unknown", Some("alice"))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.message, "Route /api/report/unknown not found");
    }
}
