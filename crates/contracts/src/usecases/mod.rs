pub mod common;
pub mod u101_build_order_report;
pub mod u102_report_history;
