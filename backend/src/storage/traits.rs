//! # Storage Traits
//!
//! Storage abstractions the domain layer depends on, so services can be
//! written against any backend that hands out these repositories.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{
    report::Report,
    report_setting::{ReportSetting, ReportSettingChange},
    transaction::Transaction,
};

/// Persistence of generated reports
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// Store a newly generated report
    async fn store_report(&self, report: &Report) -> Result<()>;

    /// List one page of a user's reports, newest first
    async fn list_reports(&self, user_id: &str, limit: u32, offset: u64) -> Result<Vec<Report>>;

    /// Total number of reports stored for a user
    async fn count_reports(&self, user_id: &str) -> Result<u64>;
}

/// Persistence of per-user report settings
#[async_trait]
pub trait ReportSettingStorage: Send + Sync {
    async fn get_report_setting(&self, user_id: &str) -> Result<Option<ReportSetting>>;

    /// Insert the setting unless `setting.user_id` already has one
    async fn insert_report_setting(&self, setting: &ReportSetting) -> Result<()>;

    /// Apply a partial update to the user's setting in one statement
    async fn update_report_setting(&self, user_id: &str, change: &ReportSettingChange) -> Result<()>;

    /// Stamp the latest generation time, leaving every other column alone
    async fn mark_generated(&self, user_id: &str, generated_at: &str) -> Result<()>;
}

/// Persistence of the transactions reports are built from
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    async fn store_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Transactions dated within `[from, to]` (inclusive, RFC 3339 bounds),
    /// oldest first
    async fn list_transactions_in_range(
        &self,
        user_id: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Transaction>>;
}

/// Factory for repositories bound to one storage backend
pub trait Connection: Send + Sync + Clone + 'static {
    type ReportRepository: ReportStorage + Clone + 'static;
    type ReportSettingRepository: ReportSettingStorage + Clone + 'static;
    type TransactionRepository: TransactionStorage + Clone + 'static;

    fn create_report_repository(&self) -> Self::ReportRepository;

    fn create_report_setting_repository(&self) -> Self::ReportSettingRepository;

    fn create_transaction_repository(&self) -> Self::TransactionRepository;
}
