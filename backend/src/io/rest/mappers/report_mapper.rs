//! Mappers for converting between report domain models and shared DTOs.

use crate::domain::models::{
    report::{CategoryTotal, Report as DomainReport, ReportSummary as DomainReportSummary},
    report_setting::ReportSetting as DomainReportSetting,
};
use shared::{
    CategorySpending, Report as SharedReport, ReportSetting as SharedReportSetting,
    ReportSummary as SharedReportSummary,
};

pub struct ReportMapper;

impl ReportMapper {
    pub fn to_dto(domain: DomainReport) -> SharedReport {
        SharedReport {
            id: domain.id,
            user_id: domain.user_id,
            period: domain.period,
            from_date: domain.from_date,
            to_date: domain.to_date,
            status: domain.status,
            summary: Self::summary_to_dto(domain.summary),
            created_at: domain.created_at,
        }
    }

    fn summary_to_dto(domain: DomainReportSummary) -> SharedReportSummary {
        SharedReportSummary {
            income: domain.income,
            expenses: domain.expenses,
            balance: domain.balance,
            savings_rate: domain.savings_rate,
            top_categories: domain
                .top_categories
                .into_iter()
                .map(|CategoryTotal { name, amount, percentage }| CategorySpending {
                    name,
                    amount,
                    percentage,
                })
                .collect(),
        }
    }
}

pub struct ReportSettingMapper;

impl ReportSettingMapper {
    pub fn to_dto(domain: DomainReportSetting) -> SharedReportSetting {
        SharedReportSetting {
            id: domain.id,
            user_id: domain.user_id,
            frequency: domain.frequency,
            is_enabled: domain.is_enabled,
            next_report_date: domain.next_report_date,
            last_generated_date: domain.last_generated_date,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
