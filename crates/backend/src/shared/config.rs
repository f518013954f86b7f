use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub history: HistoryConfig,
    pub parsing: ParsingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// Путь к журналу отчётов (относительный — от каталога бинарника)
    pub path: String,

    /// Порог символов, после которого история отдаётся усечённой
    pub max_chars: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParsingConfig {
    /// Артикулы с дефисами в собственном коде: количество для них всегда 1,
    /// дефисы не считаются разделителем количества
    pub excluded_articles: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[history]
path = "target/data/history.txt"
max_chars = 4000

[parsing]
excluded_articles = [
    "709598-1",
    "709596-1",
    "709597-1",
    "709421-1",
    "709540-1",
    "709301-1",
]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the history log path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_history_path(config: &Config) -> anyhow::Result<PathBuf> {
    let history_path_str = &config.history.path;
    let history_path = Path::new(history_path_str);

    if history_path.is_absolute() {
        return Ok(history_path.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join(history_path));
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(history_path_str))
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Зафиксировать конфигурацию процесса (вызывается один раз из main)
pub fn initialize(config: Config) {
    let _ = CONFIG.set(config);
}

pub fn get() -> &'static Config {
    CONFIG
        .get()
        .expect("Config is not initialized. Call config::initialize() first")
}
