//! # Finance Reports Backend
//!
//! Serves report history, report settings and report generation for the
//! personal finance app.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (date ranges, summaries, services)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{http::Method, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::BackendConfig;
use crate::domain::{ReportService, ReportSettingService, TransactionService};
use crate::io::rest::{self, error::handle_panic, error::route_not_found};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService<DbConnection>,
    pub report_setting_service: ReportSettingService<DbConnection>,
    pub transaction_service: TransactionService<DbConnection>,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = Arc::new(DbConnection::new(&config.database_url).await?);

    info!("Setting up domain model");
    Ok(build_app_state(db_conn))
}

/// Wire the services around an open connection
pub fn build_app_state(db_conn: Arc<DbConnection>) -> AppState {
    let report_setting_service = ReportSettingService::new(db_conn.clone());
    let report_service = ReportService::new(db_conn.clone(), report_setting_service.clone());
    let transaction_service = TransactionService::new(db_conn);

    AppState {
        report_service,
        report_setting_service,
        transaction_service,
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &BackendConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/report", rest::report_apis::router())
        .nest("/transaction", rest::transaction_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
