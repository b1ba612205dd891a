//! Report domain logic: listing history and generating new reports.
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    commands::reports::{GenerateReportCommand, GenerateReportResult, ReportListQuery, ReportListResult},
    date_range::format_timestamp,
    errors::ReportResult,
    models::report::Report,
    report_setting_service::ReportSettingService,
    summary::summarize,
};
use crate::storage::{Connection, ReportStorage, TransactionStorage};
use shared::ReportStatus;

#[derive(Clone)]
pub struct ReportService<C: Connection> {
    report_repository: C::ReportRepository,
    transaction_repository: C::TransactionRepository,
    setting_service: ReportSettingService<C>,
}

impl<C: Connection> ReportService<C> {
    pub fn new(connection: Arc<C>, setting_service: ReportSettingService<C>) -> Self {
        Self {
            report_repository: connection.create_report_repository(),
            transaction_repository: connection.create_transaction_repository(),
            setting_service,
        }
    }

    /// One page of the user's report history, newest first
    pub async fn get_all_reports(&self, query: ReportListQuery) -> ReportResult<ReportListResult> {
        let pagination = query.pagination;

        let total_count = self.report_repository.count_reports(&query.user_id).await?;
        let reports = self
            .report_repository
            .list_reports(&query.user_id, pagination.page_size(), pagination.offset())
            .await?;

        Ok(ReportListResult {
            reports,
            total_count,
            total_pages: pagination.total_pages(total_count),
            pagination,
        })
    }

    /// Aggregate the user's transactions over the range and store the result
    pub async fn generate_report(&self, command: GenerateReportCommand) -> ReportResult<GenerateReportResult> {
        let range = command.range;
        let from = format_timestamp(range.from_date());
        let to = format_timestamp(range.to_date());

        let transactions = self
            .transaction_repository
            .list_transactions_in_range(&command.user_id, &from, &to)
            .await?;

        let status = if transactions.is_empty() {
            ReportStatus::NoActivity
        } else {
            ReportStatus::Generated
        };

        let now = Utc::now();
        let created_at = format_timestamp(now);
        let report = Report {
            id: Report::generate_id(&command.user_id, now.timestamp_millis()),
            user_id: command.user_id.clone(),
            period: range.period_label(),
            from_date: from,
            to_date: to,
            status,
            summary: summarize(&transactions),
            created_at: created_at.clone(),
        };

        self.report_repository.store_report(&report).await?;
        let report_setting = self
            .setting_service
            .record_generation(&command.user_id, &created_at)
            .await?;

        info!(
            "Generated report {} for user {} over {} ({} transactions, status {})",
            report.id,
            report.user_id,
            report.period,
            transactions.len(),
            report.status
        );

        Ok(GenerateReportResult { report, report_setting })
    }
}
