//! # Domain Module
//!
//! Business logic for financial reports, independent of HTTP and SQLite.
//!
//! ## Module Organization
//!
//! - **date_range**: resolution of raw `from`/`to` values into a [`ReportRange`]
//! - **pagination**: lenient page-size/page-number handling for listings
//! - **summary**: aggregation of transactions into report figures
//! - **report_service**: report history and report generation
//! - **report_setting_service**: per-user generation settings
//! - **transaction_service**: recording the transactions reports are built from
//!
//! ## Business Rules
//!
//! - A report range is never inverted; bad dates fall back to defaults
//! - A range with no transactions still yields a report, marked `NO_ACTIVITY`
//! - Every user has exactly one setting, created with defaults on first use
//! - Disabled settings carry no next report date

pub mod commands;
pub mod date_range;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod report_service;
pub mod report_setting_service;
pub mod summary;
pub mod transaction_service;

pub use date_range::ReportRange;
pub use errors::{ReportError, ReportResult};
pub use pagination::Pagination;
pub use report_service::ReportService;
pub use report_setting_service::ReportSettingService;
pub use transaction_service::TransactionService;
