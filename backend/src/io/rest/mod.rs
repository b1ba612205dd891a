//! # REST API Interface Layer
//!
//! HTTP endpoints for the reports service, nested under `/api`:
//!
//! - `GET  /api/report/all` - paginated report history
//! - `PUT  /api/report/update-setting` - change report generation settings
//! - `GET  /api/report/generate` - generate a report over a date range
//! - `POST /api/transaction/create` - record a transaction to report on
//!
//! Handlers stay thin: extract, map to a command, call the service, map back.

pub mod auth;
pub mod error;
pub mod mappers;
pub mod report_apis;
pub mod transaction_apis;

pub use auth::CurrentUser;
pub use error::ApiError;
