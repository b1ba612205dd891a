use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::report_setting::{ReportSetting, ReportSettingChange};
use shared::ReportFrequency;
use crate::storage::connection::DbConnection;
use crate::storage::traits::ReportSettingStorage;

/// Repository for per-user report settings
#[derive(Clone)]
pub struct ReportSettingRepository {
    db: DbConnection,
}

impl ReportSettingRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReportSettingStorage for ReportSettingRepository {
    async fn get_report_setting(&self, user_id: &str) -> Result<Option<ReportSetting>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, frequency, is_enabled, next_report_date,
                   last_generated_date, created_at, updated_at
            FROM report_settings
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => {
                let frequency: String = r.get("frequency");
                Ok(Some(ReportSetting {
                    id: r.get("id"),
                    user_id: r.get("user_id"),
                    frequency: frequency.parse().map_err(|e: String| anyhow!(e))?,
                    is_enabled: r.get("is_enabled"),
                    next_report_date: r.get("next_report_date"),
                    last_generated_date: r.get("last_generated_date"),
                    created_at: r.get("created_at"),
                    updated_at: r.get("updated_at"),
                }))
            }
            None => Ok(None),
        }
    }

    async fn insert_report_setting(&self, setting: &ReportSetting) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO report_settings (
                id, user_id, frequency, is_enabled, next_report_date,
                last_generated_date, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&setting.id)
        .bind(&setting.user_id)
        .bind(setting.frequency.to_string())
        .bind(setting.is_enabled)
        .bind(&setting.next_report_date)
        .bind(&setting.last_generated_date)
        .bind(&setting.created_at)
        .bind(&setting.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn update_report_setting(&self, user_id: &str, change: &ReportSettingChange) -> Result<()> {
        // SET expressions all read the pre-update row, so the schedule is
        // chosen from the resulting frequency and flag
        sqlx::query(
            r#"
            UPDATE report_settings SET
                frequency = COALESCE(?1, frequency),
                is_enabled = COALESCE(?2, is_enabled),
                next_report_date = CASE
                    WHEN NOT COALESCE(?2, is_enabled) THEN NULL
                    WHEN COALESCE(?1, frequency) = ?3 THEN ?4
                    ELSE ?5
                END,
                updated_at = ?6
            WHERE user_id = ?7
            "#,
        )
        .bind(change.frequency.map(|f| f.to_string()))
        .bind(change.is_enabled)
        .bind(ReportFrequency::Weekly.to_string())
        .bind(&change.next_weekly_date)
        .bind(&change.next_monthly_date)
        .bind(&change.updated_at)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn mark_generated(&self, user_id: &str, generated_at: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE report_settings
            SET last_generated_date = ?, updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(generated_at)
        .bind(generated_at)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::report_setting::next_report_date;
    use crate::domain::date_range::format_timestamp;
    use chrono::{TimeZone, Utc};

    async fn setup_test() -> ReportSettingRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ReportSettingRepository::new(db)
    }

    async fn seeded(now: chrono::DateTime<Utc>) -> (ReportSettingRepository, ReportSetting) {
        let repo = setup_test().await;
        let setting = ReportSetting::default_for("alice", now);
        repo.insert_report_setting(&setting).await.expect("Failed to insert setting");
        (repo, setting)
    }

    #[tokio::test]
    async fn test_get_missing_setting() {
        let repo = setup_test().await;
        let result = repo.get_report_setting("nobody").await.expect("Query failed");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_insert_does_not_overwrite_existing_setting() {
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        let (repo, setting) = seeded(now).await;
        assert_eq!(repo.get_report_setting("alice").await.unwrap(), Some(setting.clone()));

        let mut other = setting.clone();
        other.frequency = ReportFrequency::Weekly;
        other.is_enabled = false;
        repo.insert_report_setting(&other).await.expect("Insert failed");

        assert_eq!(repo.get_report_setting("alice").await.unwrap(), Some(setting));
    }

    #[tokio::test]
    async fn test_update_applies_only_given_fields() {
        let created = Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap();
        let (repo, setting) = seeded(created).await;

        // 2024-06-12 is a Wednesday
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
        repo.update_report_setting("alice", &ReportSettingChange::new(None, Some(ReportFrequency::Weekly), now))
            .await
            .expect("Update failed");

        let stored = repo.get_report_setting("alice").await.unwrap().unwrap();
        assert_eq!(stored.frequency, ReportFrequency::Weekly);
        assert!(stored.is_enabled);
        assert_eq!(
            stored.next_report_date,
            next_report_date(ReportFrequency::Weekly, now).map(format_timestamp)
        );
        assert_eq!(stored.updated_at, format_timestamp(now));
        assert_eq!(stored.created_at, setting.created_at);
    }

    #[tokio::test]
    async fn test_update_disable_then_enable_reschedules() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
        let (repo, _) = seeded(now).await;

        repo.update_report_setting("alice", &ReportSettingChange::new(Some(false), None, now))
            .await
            .unwrap();
        let disabled = repo.get_report_setting("alice").await.unwrap().unwrap();
        assert!(!disabled.is_enabled);
        assert_eq!(disabled.frequency, ReportFrequency::Monthly);
        assert_eq!(disabled.next_report_date, None);

        repo.update_report_setting("alice", &ReportSettingChange::new(Some(true), None, now))
            .await
            .unwrap();
        let enabled = repo.get_report_setting("alice").await.unwrap().unwrap();
        assert_eq!(enabled.next_report_date.as_deref(), Some("2024-07-01T00:00:00.000Z"));
    }

    #[tokio::test]
    async fn test_mark_generated_keeps_concurrent_update() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
        let (repo, _) = seeded(now).await;

        // A settings change lands between a generation's read and its stamp
        let before_generation = repo.get_report_setting("alice").await.unwrap().unwrap();
        repo.update_report_setting(
            "alice",
            &ReportSettingChange::new(Some(false), Some(ReportFrequency::Weekly), now),
        )
        .await
        .unwrap();
        repo.mark_generated("alice", "2024-06-12T09:00:01.000Z").await.unwrap();

        let stored = repo.get_report_setting("alice").await.unwrap().unwrap();
        assert_ne!(stored.frequency, before_generation.frequency);
        assert_eq!(stored.frequency, ReportFrequency::Weekly);
        assert!(!stored.is_enabled);
        assert_eq!(stored.next_report_date, None);
        assert_eq!(stored.last_generated_date.as_deref(), Some("2024-06-12T09:00:01.000Z"));
        assert_eq!(stored.updated_at, "2024-06-12T09:00:01.000Z");
    }

    #[tokio::test]
    async fn test_updates_for_missing_user_are_noops() {
        let repo = setup_test().await;
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();

        repo.update_report_setting("nobody", &ReportSettingChange::new(Some(false), None, now))
            .await
            .unwrap();
        repo.mark_generated("nobody", "2024-06-12T09:00:00.000Z").await.unwrap();

        assert!(repo.get_report_setting("nobody").await.unwrap().is_none());
    }
}
