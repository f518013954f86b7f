use thiserror::Error;

/// Ошибки построения отчёта. Обе означают негодный вход: повтор запроса
/// с тем же файлом даст тот же результат, поэтому ретраев нет.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("В файле отсутствует колонка '{column}'")]
    MissingColumn { column: String },

    #[error("Не удалось разобрать количество в артикуле '{code}'")]
    InvalidQuantitySegment { code: String },
}
