//! Domain model for per-user report generation settings.
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::ReportFrequency;

use crate::domain::date_range::format_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSetting {
    pub id: String,
    pub user_id: String,
    pub frequency: ReportFrequency,
    pub is_enabled: bool,
    pub next_report_date: Option<String>, // RFC 3339 timestamp
    pub last_generated_date: Option<String>, // RFC 3339 timestamp
    pub created_at: String,
    pub updated_at: String,
}

impl ReportSetting {
    pub fn generate_id(user_id: &str) -> String {
        format!("report-setting::{}", user_id)
    }

    /// Settings a user gets before ever configuring anything
    pub fn default_for(user_id: &str, now: DateTime<Utc>) -> Self {
        let timestamp = format_timestamp(now);
        let mut setting = Self {
            id: Self::generate_id(user_id),
            user_id: user_id.to_string(),
            frequency: ReportFrequency::Monthly,
            is_enabled: true,
            next_report_date: None,
            last_generated_date: None,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };
        setting.reschedule(now);
        setting
    }

    /// Recompute `next_report_date` from the current frequency and flag
    pub fn reschedule(&mut self, now: DateTime<Utc>) {
        self.next_report_date = if self.is_enabled {
            next_report_date(self.frequency, now).map(format_timestamp)
        } else {
            None
        };
    }
}

/// A partial settings update, applied by storage in a single statement.
///
/// Fields left `None` keep their stored value. The next report date depends
/// on the resulting frequency and flag, so both candidates are precomputed
/// and storage picks one from the row it updates.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettingChange {
    pub is_enabled: Option<bool>,
    pub frequency: Option<ReportFrequency>,
    pub next_monthly_date: Option<String>,
    pub next_weekly_date: Option<String>,
    pub updated_at: String,
}

impl ReportSettingChange {
    pub fn new(is_enabled: Option<bool>, frequency: Option<ReportFrequency>, now: DateTime<Utc>) -> Self {
        Self {
            is_enabled,
            frequency,
            next_monthly_date: next_report_date(ReportFrequency::Monthly, now).map(format_timestamp),
            next_weekly_date: next_report_date(ReportFrequency::Weekly, now).map(format_timestamp),
            updated_at: format_timestamp(now),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_enabled.is_none() && self.frequency.is_none()
    }
}

/// Start of the next reporting period, at 00:00 UTC.
///
/// Monthly reports run on the first day of the following month, weekly ones
/// on the following Monday.
pub fn next_report_date(frequency: ReportFrequency, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let today = now.date_naive();
    let date = match frequency {
        ReportFrequency::Monthly => {
            let (year, month) = if today.month() == 12 {
                (today.year() + 1, 1)
            } else {
                (today.year(), today.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1)?
        }
        ReportFrequency::Weekly => {
            let days_ahead = 7 - u64::from(today.weekday().num_days_from_monday());
            today.checked_add_days(Days::new(days_ahead))?
        }
    };
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_monthly_next_date_is_first_of_next_month() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 18, 0, 0).unwrap();
        assert_eq!(
            next_report_date(ReportFrequency::Monthly, now),
            Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_monthly_next_date_rolls_over_year() {
        let now = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
        assert_eq!(
            next_report_date(ReportFrequency::Monthly, now),
            Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_weekly_next_date_is_following_monday() {
        // 2024-06-12 is a Wednesday
        let wednesday = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
        assert_eq!(
            next_report_date(ReportFrequency::Weekly, wednesday),
            Some(Utc.with_ymd_and_hms(2024, 6, 17, 0, 0, 0).unwrap())
        );

        // A Monday schedules the Monday after, not itself
        let monday = Utc.with_ymd_and_hms(2024, 6, 17, 9, 0, 0).unwrap();
        assert_eq!(
            next_report_date(ReportFrequency::Weekly, monday),
            Some(Utc.with_ymd_and_hms(2024, 6, 24, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_default_setting_is_enabled_monthly() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let setting = ReportSetting::default_for("user-1", now);
        assert!(setting.is_enabled);
        assert_eq!(setting.frequency, ReportFrequency::Monthly);
        assert_eq!(setting.next_report_date.as_deref(), Some("2024-04-01T00:00:00.000Z"));
        assert_eq!(setting.last_generated_date, None);
    }

    #[test]
    fn test_change_precomputes_both_schedules() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap();
        let change = ReportSettingChange::new(None, Some(ReportFrequency::Weekly), now);
        assert!(!change.is_empty());
        assert_eq!(change.next_monthly_date.as_deref(), Some("2024-07-01T00:00:00.000Z"));
        assert_eq!(change.next_weekly_date.as_deref(), Some("2024-06-17T00:00:00.000Z"));
        assert!(ReportSettingChange::new(None, None, now).is_empty());
    }

    #[test]
    fn test_disabled_setting_has_no_next_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let mut setting = ReportSetting::default_for("user-1", now);
        setting.is_enabled = false;
        setting.reschedule(now);
        assert_eq!(setting.next_report_date, None);
    }
}
