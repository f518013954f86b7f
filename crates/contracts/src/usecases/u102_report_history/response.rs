use serde::{Deserialize, Serialize};

/// Содержимое журнала отчётов
///
/// `exists == false` означает, что журнал ещё не создавался — это не то же
/// самое, что существующий, но пустой журнал (`exists == true`, пустой text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub exists: bool,

    /// Текст журнала; при усечении — только последние строки
    pub text: String,

    /// Журнал превысил лимит символов и был усечён до последних 50 строк
    pub truncated: bool,
}

impl HistoryResponse {
    pub fn missing() -> Self {
        Self {
            exists: false,
            text: String::new(),
            truncated: false,
        }
    }
}
