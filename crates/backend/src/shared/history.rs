use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Сколько последних строк журнала отдаётся при превышении лимита символов.
/// Усечение по строкам сохраняет границы записей, сделанных `append`.
const TAIL_LINES: usize = 50;

/// Журнал отчётов: плоский текстовый файл, только дозапись в конец.
/// Записи никогда не изменяются и не удаляются.
pub struct HistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// Результат чтения существующего журнала
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTail {
    pub text: String,
    pub truncated: bool,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Дописывает запись вида "<дата> - \n<отчёт>\n\n" в конец журнала.
    /// Запись пишется одним write_all под мьютексом, поэтому параллельные
    /// append не перемешиваются.
    pub fn append(&self, report: &str) -> Result<()> {
        // Под замком только запись в файл, состояния нет — отравленный
        // замок безопасно переиспользовать, падать из append нельзя
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let date = Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("{} - \n{}\n\n", date, report);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("Failed to append to {}", self.path.display()))?;

        Ok(())
    }

    /// Читает журнал целиком. `Ok(None)` — журнала ещё нет (это не ошибка
    /// и не то же самое, что пустой журнал). Если текст длиннее `max_chars`
    /// символов, возвращаются только последние 50 строк.
    pub fn read_tail(&self, max_chars: usize) -> Result<Option<HistoryTail>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        if text.chars().count() > max_chars {
            let lines: Vec<&str> = text.split('\n').collect();
            let start = lines.len().saturating_sub(TAIL_LINES);
            Ok(Some(HistoryTail {
                text: lines[start..].join("\n"),
                truncated: true,
            }))
        } else {
            Ok(Some(HistoryTail {
                text,
                truncated: false,
            }))
        }
    }
}

static HISTORY_STORE: OnceCell<Arc<HistoryStore>> = OnceCell::new();

/// Инициализация общего журнала (вызывается один раз из main)
pub fn initialize(path: PathBuf) {
    let _ = HISTORY_STORE.set(Arc::new(HistoryStore::new(path)));
}

pub fn store() -> Arc<HistoryStore> {
    HISTORY_STORE
        .get()
        .expect("History store is not initialized. Call history::initialize() first")
        .clone()
}
