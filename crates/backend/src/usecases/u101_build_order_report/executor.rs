use std::sync::Arc;

use contracts::usecases::u101_build_order_report::BuildReportResponse;

use crate::shared::history::HistoryStore;
use crate::shared::tabular::TabularDocument;

use super::aggregator::aggregate;
use super::error::ReportError;
use super::normalizer::ExclusionSet;
use super::renderer::render;

/// Executor для UseCase построения отчёта по заказам
pub struct BuildReportExecutor {
    exclusions: ExclusionSet,
    history: Arc<HistoryStore>,
}

impl BuildReportExecutor {
    pub fn new(exclusions: ExclusionSet, history: Arc<HistoryStore>) -> Self {
        Self {
            exclusions,
            history,
        }
    }

    /// Строит отчёт по табличному документу и дописывает его в журнал.
    ///
    /// Сбой записи в журнал не отменяет уже построенный отчёт: запись
    /// логируется предупреждением, отчёт возвращается вызывающему.
    /// Неудачная агрегация журнал не трогает вовсе.
    pub fn execute(&self, doc: &TabularDocument) -> Result<BuildReportResponse, ReportError> {
        tracing::info!("Начало обработки файла, строк: {}", doc.row_count());

        let aggregated = aggregate(doc, &self.exclusions)?;
        let report = render(&aggregated);
        tracing::info!("Обработано уникальных артикулов: {}", aggregated.len());

        if let Err(e) = self.history.append(&report) {
            tracing::warn!("Не удалось сохранить историю: {:#}", e);
        } else {
            tracing::info!("История сохранена в {}", self.history.path().display());
        }

        Ok(BuildReportResponse {
            report,
            unique_articles: aggregated.len(),
            rows_processed: doc.row_count(),
            generated_at: chrono::Local::now(),
        })
    }
}
