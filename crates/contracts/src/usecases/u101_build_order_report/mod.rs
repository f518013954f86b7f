pub mod response;

pub use response::BuildReportResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct BuildOrderReport;

impl UseCaseMetadata for BuildOrderReport {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "build_order_report"
    }

    fn display_name() -> &'static str {
        "Отчёт по заказам"
    }

    fn description() -> &'static str {
        "Сводный отчёт по артикулам из файла заказов Wildberries"
    }
}
