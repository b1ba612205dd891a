// Repository modules
pub mod report_repository;
pub mod report_setting_repository;
pub mod transaction_repository;

// Re-export repository types
pub use report_repository::ReportRepository;
pub use report_setting_repository::ReportSettingRepository;
pub use transaction_repository::TransactionRepository;
