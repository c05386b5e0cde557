use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::debounce::DEFAULT_QUIET_PERIOD;
use crate::pagination::MAX_TOTAL_PAGES;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Fully resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub storage: StorageConfig,
    pub metadata: ConfigMetadata,
}

/// Remote catalog endpoint and credentials.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Validated `http(s)` URL without a trailing slash.
    pub base_url: String,
    pub api_token: Option<String>,
    pub language: Option<String>,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("has_token", &self.api_token.is_some())
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            language: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Quiet period before search text reaches the catalog.
    pub debounce: Duration,
    /// Ceiling applied to reported page counts; never above the catalog's own.
    pub max_total_pages: u32,
    pub trending_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_QUIET_PERIOD,
            max_total_pages: MAX_TOTAL_PAGES,
            trending_limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding favorites and trending slots.
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("org", "reelscout", "reelscout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".reelscout"))
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}
