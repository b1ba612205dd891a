pub mod report;
pub mod report_setting;
pub mod transaction;
