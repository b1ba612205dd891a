pub mod use_reports;
