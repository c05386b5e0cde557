use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub session: FileSessionConfig,
    #[serde(default)]
    pub storage: FileStorageConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Humantime string, e.g. `"10s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileSessionConfig {
    /// Humantime string, e.g. `"500ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_limit: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Values read from the process environment. Numbers and durations stay raw
/// so the loader can report which variable was malformed.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_token: Option<String>,
    pub base_url: Option<String>,
    pub language: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub debounce_ms: Option<String>,
    pub request_timeout: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("REELSCOUT_CONFIG").map(PathBuf::from),
            api_token: non_empty_var("TMDB_API_TOKEN"),
            base_url: non_empty_var("REELSCOUT_API_BASE_URL"),
            language: non_empty_var("REELSCOUT_LANGUAGE"),
            data_dir: non_empty_var("REELSCOUT_DATA_DIR").map(PathBuf::from),
            debounce_ms: non_empty_var("REELSCOUT_DEBOUNCE_MS"),
            request_timeout: non_empty_var("REELSCOUT_REQUEST_TIMEOUT"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}
