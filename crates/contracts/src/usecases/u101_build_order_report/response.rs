use serde::{Deserialize, Serialize};

/// Результат обработки файла заказов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReportResponse {
    /// Готовый текст отчёта: по строке на артикул, "<артикул> <кол-во>шт"
    pub report: String,

    /// Количество уникальных артикулов после группировки
    pub unique_articles: usize,

    /// Сколько строк входного файла обработано
    pub rows_processed: usize,

    /// Момент формирования отчёта
    pub generated_at: chrono::DateTime<chrono::Local>,
}
