use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::report::{CategoryTotal, Report, ReportSummary};
use crate::storage::connection::DbConnection;
use crate::storage::traits::ReportStorage;

/// Repository for generated report records
#[derive(Clone)]
pub struct ReportRepository {
    db: DbConnection,
}

impl ReportRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_report(row: &SqliteRow) -> Result<Report> {
        let status: String = row.get("status");
        let top_categories: String = row.get("top_categories");

        Ok(Report {
            id: row.get("id"),
            user_id: row.get("user_id"),
            period: row.get("period"),
            from_date: row.get("from_date"),
            to_date: row.get("to_date"),
            status: status.parse().map_err(|e: String| anyhow!(e))?,
            summary: ReportSummary {
                income: row.get("income"),
                expenses: row.get("expenses"),
                balance: row.get("balance"),
                savings_rate: row.get("savings_rate"),
                top_categories: serde_json::from_str::<Vec<CategoryTotal>>(&top_categories)?,
            },
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ReportStorage for ReportRepository {
    async fn store_report(&self, report: &Report) -> Result<()> {
        let top_categories = serde_json::to_string(&report.summary.top_categories)?;

        sqlx::query(
            r#"
            INSERT INTO reports (
                id, user_id, period, from_date, to_date, status,
                income, expenses, balance, savings_rate, top_categories, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.id)
        .bind(&report.user_id)
        .bind(&report.period)
        .bind(&report.from_date)
        .bind(&report.to_date)
        .bind(report.status.to_string())
        .bind(report.summary.income)
        .bind(report.summary.expenses)
        .bind(report.summary.balance)
        .bind(report.summary.savings_rate)
        .bind(top_categories)
        .bind(&report.created_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_reports(&self, user_id: &str, limit: u32, offset: u64) -> Result<Vec<Report>> {
        // ROWID breaks ties between reports created in the same millisecond
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, period, from_date, to_date, status,
                   income, expenses, balance, savings_rate, top_categories, created_at
            FROM reports
            WHERE user_id = ?
            ORDER BY created_at DESC, ROWID DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id)
        .bind(i64::from(limit))
        .bind(i64::try_from(offset).unwrap_or(i64::MAX))
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_report).collect()
    }

    async fn count_reports(&self, user_id: &str) -> Result<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM reports WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.db.pool())
            .await?;

        let count: i64 = row.get("count");
        Ok(count.max(0) as u64)
    }
}
