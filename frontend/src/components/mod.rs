pub mod generate_report_form;
pub mod report_table;
pub mod schedule_report_drawer;
