pub mod response;

pub use response::HistoryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ReportHistory;

impl UseCaseMetadata for ReportHistory {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "report_history"
    }

    fn display_name() -> &'static str {
        "История отчётов"
    }

    fn description() -> &'static str {
        "Просмотр журнала ранее сформированных отчётов"
    }
}
