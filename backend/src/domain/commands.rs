//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod reports {
    use crate::domain::date_range::ReportRange;
    use crate::domain::models::{report::Report, report_setting::ReportSetting};
    use crate::domain::pagination::Pagination;

    /// Query for one page of a user's report history.
    #[derive(Debug, Clone)]
    pub struct ReportListQuery {
        pub user_id: String,
        pub pagination: Pagination,
    }

    /// Result of listing reports.
    #[derive(Debug, Clone)]
    pub struct ReportListResult {
        pub reports: Vec<Report>,
        pub total_count: u64,
        pub total_pages: u64,
        pub pagination: Pagination,
    }

    /// Command for generating a report over an already-resolved range.
    #[derive(Debug, Clone)]
    pub struct GenerateReportCommand {
        pub user_id: String,
        pub range: ReportRange,
    }

    /// Result of generating a report.
    #[derive(Debug, Clone)]
    pub struct GenerateReportResult {
        pub report: Report,
        pub report_setting: ReportSetting,
    }
}

pub mod settings {
    use crate::domain::models::report_setting::ReportSetting;
    use shared::ReportFrequency;

    /// Partial update of a user's report settings.
    #[derive(Debug, Clone)]
    pub struct UpdateReportSettingCommand {
        pub user_id: String,
        pub is_enabled: Option<bool>,
        pub frequency: Option<ReportFrequency>,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateReportSettingResult {
        pub report_setting: ReportSetting,
        pub success_message: String,
    }
}

pub mod transactions {
    use shared::TransactionType;

    /// Input for recording a new transaction.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub user_id: String,
        pub title: String,
        pub amount: f64,
        pub category: String,
        pub transaction_type: TransactionType,
        pub date: Option<String>,
    }
}
