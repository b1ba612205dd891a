use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    /// Report was generated from at least one transaction
    Generated,
    /// The requested range held no transactions
    NoActivity,
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportStatus::Generated => write!(f, "GENERATED"),
            ReportStatus::NoActivity => write!(f, "NO_ACTIVITY"),
        }
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GENERATED" => Ok(ReportStatus::Generated),
            "NO_ACTIVITY" => Ok(ReportStatus::NoActivity),
            other => Err(format!("Unknown report status: {}", other)),
        }
    }
}

/// How often reports are generated automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportFrequency {
    Monthly,
    Weekly,
}

impl fmt::Display for ReportFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFrequency::Monthly => write!(f, "MONTHLY"),
            ReportFrequency::Weekly => write!(f, "WEEKLY"),
        }
    }
}

impl FromStr for ReportFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONTHLY" => Ok(ReportFrequency::Monthly),
            "WEEKLY" => Ok(ReportFrequency::Weekly),
            other => Err(format!("Unknown report frequency: {}", other)),
        }
    }
}

/// Spending total for a single expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub name: String,
    pub amount: f64,
    /// Share of total expenses, 0..=100
    pub percentage: f64,
}

/// Aggregated figures for the report period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub income: f64,
    pub expenses: f64,
    /// Income minus expenses
    pub balance: f64,
    /// Balance as a percentage of income (0 when there is no income)
    pub savings_rate: f64,
    pub top_categories: Vec<CategorySpending>,
}

/// A stored report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub user_id: String,
    /// Human-readable period label, e.g. "Jan 1, 2024 - Jan 31, 2024"
    pub period: String,
    /// Start of the period (RFC 3339)
    pub from_date: String,
    /// End of the period (RFC 3339)
    pub to_date: String,
    pub status: ReportStatus,
    pub summary: ReportSummary,
    pub created_at: String,
}

/// Per-user report generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSetting {
    pub id: String,
    pub user_id: String,
    pub frequency: ReportFrequency,
    pub is_enabled: bool,
    /// Next scheduled generation (RFC 3339), absent while disabled
    pub next_report_date: Option<String>,
    pub last_generated_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllReportsResponse {
    pub message: String,
    pub reports: Vec<Report>,
    pub total_count: u64,
    pub total_pages: u64,
    pub page_size: u32,
    pub page_number: u32,
}

/// Body of PUT /api/report/update-setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateReportSettingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<ReportFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateReportSettingResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResponse {
    pub message: String,
    pub report: Report,
    pub report_setting: ReportSetting,
}

/// Direction of money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "INCOME"),
            TransactionType::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub title: String,
    /// Always positive; direction is carried by `transaction_type`
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the transaction happened (RFC 3339)
    pub date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Short description (max 256 characters)
    pub title: String,
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Optional date override - uses current time if not provided
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionResponse {
    pub message: String,
    pub transaction: Transaction,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Body of every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_setting_request_rejects_unknown_fields() {
        let result = serde_json::from_str::<UpdateReportSettingRequest>(
            r#"{"isEnabled": true, "schedule": "daily"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_setting_request_accepts_partial_body() {
        let request: UpdateReportSettingRequest =
            serde_json::from_str(r#"{"frequency": "WEEKLY"}"#).unwrap();
        assert_eq!(request.frequency, Some(ReportFrequency::Weekly));
        assert_eq!(request.is_enabled, None);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = Report {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            period: "Jan 1, 2024 - Jan 31, 2024".to_string(),
            from_date: "2024-01-01T00:00:00.000Z".to_string(),
            to_date: "2024-01-31T00:00:00.000Z".to_string(),
            status: ReportStatus::NoActivity,
            summary: ReportSummary {
                income: 0.0,
                expenses: 0.0,
                balance: 0.0,
                savings_rate: 0.0,
                top_categories: vec![],
            },
            created_at: "2024-02-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["status"], "NO_ACTIVITY");
        assert_eq!(json["summary"]["savingsRate"], 0.0);
    }

    #[test]
    fn test_enum_strings_round_trip_through_display() {
        assert_eq!(ReportStatus::NoActivity.to_string().parse::<ReportStatus>(), Ok(ReportStatus::NoActivity));
        assert_eq!("WEEKLY".parse::<ReportFrequency>(), Ok(ReportFrequency::Weekly));
        assert!("DAILY".parse::<ReportFrequency>().is_err());
        assert!("income".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_transaction_type_field_is_named_type() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"title": "Rent", "amount": 900.0, "category": "housing", "type": "EXPENSE"}"#,
        )
        .unwrap();
        assert_eq!(request.transaction_type, TransactionType::Expense);
        assert_eq!(request.date, None);
    }
}
