use std::sync::Arc;

use anyhow::Result;
use contracts::usecases::u102_report_history::HistoryResponse;

use crate::shared::history::HistoryStore;

/// Executor для UseCase просмотра истории отчётов
pub struct HistoryExecutor {
    history: Arc<HistoryStore>,

    /// Порог символов, после которого отдаются только последние строки.
    /// У канала доставки есть внешний лимит длины сообщения.
    max_chars: usize,
}

impl HistoryExecutor {
    pub fn new(history: Arc<HistoryStore>, max_chars: usize) -> Self {
        Self { history, max_chars }
    }

    pub fn execute(&self) -> Result<HistoryResponse> {
        match self.history.read_tail(self.max_chars)? {
            Some(tail) => {
                if tail.truncated {
                    tracing::info!("История длиннее лимита, отдаются последние записи");
                }
                Ok(HistoryResponse {
                    exists: true,
                    text: tail.text,
                    truncated: tail.truncated,
                })
            }
            None => {
                tracing::info!("Файл истории ещё не создан");
                Ok(HistoryResponse::missing())
            }
        }
    }
}
