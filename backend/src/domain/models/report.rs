//! Domain model for a generated report.
use serde::{Deserialize, Serialize};
use shared::ReportStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub savings_rate: f64,
    pub top_categories: Vec<CategoryTotal>,
}

impl ReportSummary {
    pub fn empty() -> Self {
        Self {
            income: 0.0,
            expenses: 0.0,
            balance: 0.0,
            savings_rate: 0.0,
            top_categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub user_id: String,
    pub period: String,
    pub from_date: String, // RFC 3339 timestamp
    pub to_date: String,   // RFC 3339 timestamp
    pub status: ReportStatus,
    pub summary: ReportSummary,
    pub created_at: String, // RFC 3339 timestamp
}

impl Report {
    /// Generate a report ID based on user ID and timestamp
    pub fn generate_id(user_id: &str, epoch_millis: i64) -> String {
        format!("report::{}::{}::{}", user_id, epoch_millis, uuid::Uuid::new_v4().simple())
    }
}
