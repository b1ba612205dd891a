//! Report settings domain logic: defaults, validation and rescheduling.
use anyhow::anyhow;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::{
    commands::settings::{UpdateReportSettingCommand, UpdateReportSettingResult},
    errors::{ReportError, ReportResult},
    models::report_setting::{ReportSetting, ReportSettingChange},
};
use crate::storage::{Connection, ReportSettingStorage};

#[derive(Clone)]
pub struct ReportSettingService<C: Connection> {
    setting_repository: C::ReportSettingRepository,
}

impl<C: Connection> ReportSettingService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            setting_repository: connection.create_report_setting_repository(),
        }
    }

    /// Fetch the user's settings, persisting the defaults on first access
    pub async fn get_or_create_setting(&self, user_id: &str) -> ReportResult<ReportSetting> {
        if let Some(setting) = self.setting_repository.get_report_setting(user_id).await? {
            return Ok(setting);
        }

        // A concurrent request may insert first; the stored row wins
        let setting = ReportSetting::default_for(user_id, Utc::now());
        self.setting_repository.insert_report_setting(&setting).await?;
        info!("Created default report setting for user {}", user_id);
        self.load_setting(user_id).await
    }

    pub async fn update_report_setting(
        &self,
        command: UpdateReportSettingCommand,
    ) -> ReportResult<UpdateReportSettingResult> {
        let change = ReportSettingChange::new(command.is_enabled, command.frequency, Utc::now());
        if change.is_empty() {
            return Err(ReportError::invalid_field(
                "body",
                "At least one of isEnabled or frequency must be provided",
            ));
        }

        self.get_or_create_setting(&command.user_id).await?;
        self.setting_repository
            .update_report_setting(&command.user_id, &change)
            .await?;
        let setting = self.load_setting(&command.user_id).await?;

        info!(
            "Updated report setting for user {}: frequency={} enabled={}",
            setting.user_id, setting.frequency, setting.is_enabled
        );

        Ok(UpdateReportSettingResult {
            report_setting: setting,
            success_message: "Reports setting updated successfully".to_string(),
        })
    }

    /// Stamp the time of the latest generation and return the saved setting
    pub async fn record_generation(&self, user_id: &str, generated_at: &str) -> ReportResult<ReportSetting> {
        self.get_or_create_setting(user_id).await?;
        self.setting_repository.mark_generated(user_id, generated_at).await?;
        self.load_setting(user_id).await
    }

    async fn load_setting(&self, user_id: &str) -> ReportResult<ReportSetting> {
        self.setting_repository
            .get_report_setting(user_id)
            .await?
            .ok_or_else(|| anyhow!("Report setting for user {} is missing", user_id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;
    use shared::ReportFrequency;

    async fn create_test_service() -> ReportSettingService<DbConnection> {
        let connection = Arc::new(DbConnection::init_test().await.unwrap());
        ReportSettingService::new(connection)
    }

    fn update(user_id: &str, is_enabled: Option<bool>, frequency: Option<ReportFrequency>) -> UpdateReportSettingCommand {
        UpdateReportSettingCommand {
            user_id: user_id.to_string(),
            is_enabled,
            frequency,
        }
    }

    #[tokio::test]
    async fn test_default_setting_created_once() {
        let service = create_test_service().await;

        let first = service.get_or_create_setting("alice").await.unwrap();
        let second = service.get_or_create_setting("alice").await.unwrap();

        assert_eq!(first, second);
        assert!(first.is_enabled);
        assert_eq!(first.frequency, ReportFrequency::Monthly);
        assert!(first.next_report_date.is_some());
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let service = create_test_service().await;

        let result = service.update_report_setting(update("alice", None, None)).await;
        match result {
            Err(ReportError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "body");
            }
            other => panic!("Expected validation error, got {:?}", other.map(|r| r.report_setting)),
        }
    }

    #[tokio::test]
    async fn test_disable_clears_next_report_date() {
        let service = create_test_service().await;

        let result = service
            .update_report_setting(update("alice", Some(false), None))
            .await
            .unwrap();

        assert!(!result.report_setting.is_enabled);
        assert_eq!(result.report_setting.next_report_date, None);
        assert_eq!(result.success_message, "Reports setting updated successfully");

        let stored = service.get_or_create_setting("alice").await.unwrap();
        assert_eq!(stored, result.report_setting);
    }

    #[tokio::test]
    async fn test_frequency_change_keeps_enabled_flag() {
        let service = create_test_service().await;

        let result = service
            .update_report_setting(update("alice", None, Some(ReportFrequency::Weekly)))
            .await
            .unwrap();

        assert!(result.report_setting.is_enabled);
        assert_eq!(result.report_setting.frequency, ReportFrequency::Weekly);
        assert!(result.report_setting.next_report_date.is_some());
    }

    #[tokio::test]
    async fn test_record_generation_preserves_saved_update() {
        let service = create_test_service().await;
        service.get_or_create_setting("alice").await.unwrap();

        service
            .update_report_setting(update("alice", Some(false), Some(ReportFrequency::Weekly)))
            .await
            .unwrap();
        let setting = service
            .record_generation("alice", "2024-02-01T10:00:00.000Z")
            .await
            .unwrap();

        assert_eq!(setting.frequency, ReportFrequency::Weekly);
        assert!(!setting.is_enabled);
        assert_eq!(setting.next_report_date, None);
        assert_eq!(setting.last_generated_date.as_deref(), Some("2024-02-01T10:00:00.000Z"));
    }

    #[tokio::test]
    async fn test_record_generation_sets_last_generated_date() {
        let service = create_test_service().await;

        let setting = service
            .record_generation("alice", "2024-02-01T10:00:00.000Z")
            .await
            .unwrap();

        assert_eq!(setting.last_generated_date.as_deref(), Some("2024-02-01T10:00:00.000Z"));
    }
}
