//! # Storage Module
//!
//! Handles all data persistence for the reports service.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation lives in [`repositories`] and is wired up through
//! [`DbConnection`], which owns the SQLx pool and creates the schema on
//! connect.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{ReportRepository, ReportSettingRepository, TransactionRepository};
pub use traits::{Connection, ReportSettingStorage, ReportStorage, TransactionStorage};
