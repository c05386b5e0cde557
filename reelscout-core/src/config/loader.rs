use once_cell::sync::Lazy;
use std::{
    fs,
    path::PathBuf,
    time::Duration,
};
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::{
    models::{
        CatalogConfig, ConfigMetadata, ConfigWarnings, DEFAULT_BASE_URL,
        DEFAULT_REQUEST_TIMEOUT, DiscoveryConfig, SessionConfig, StorageConfig,
        default_data_dir,
    },
    sources::{EnvConfig, FileConfig},
};
use crate::debounce::DEFAULT_QUIET_PERIOD;
use crate::pagination::MAX_TOTAL_PAGES;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("reelscout.toml"),
        PathBuf::from("config/reelscout.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let env_config = EnvConfig::gather();
        let (file_config, config_path) = self.load_file_config(&env_config)?;
        debug!(?config_path, env_file_loaded, "configuration sources resolved");

        let metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };
        compose_config(file_config, &env_config, metadata)
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let requested = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match requested {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

/// Merge sources with precedence env > file > defaults.
pub fn compose_config(
    file_config: Option<FileConfig>,
    env: &EnvConfig,
    metadata: ConfigMetadata,
) -> Result<ConfigLoad, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();
    let FileConfig {
        catalog: file_catalog,
        session: file_session,
        storage: file_storage,
    } = file_config.unwrap_or_default();

    let raw_base_url = env
        .base_url
        .clone()
        .or(file_catalog.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = validate_base_url(&raw_base_url)?;

    let api_token = env
        .api_token
        .clone()
        .or(file_catalog.api_token)
        .filter(|token| !token.trim().is_empty());
    if api_token.is_none() {
        warnings.push_with_hint(
            "TMDB_API_TOKEN not configured; the catalog will reject requests",
            "Set TMDB_API_TOKEN or add api_token under [catalog] in reelscout.toml",
        );
    }

    let request_timeout = match env.request_timeout.as_deref() {
        Some(raw) => parse_duration("REELSCOUT_REQUEST_TIMEOUT", raw)?,
        None => match file_catalog.request_timeout.as_deref() {
            Some(raw) => parse_duration("catalog.request_timeout", raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        },
    };

    let catalog = CatalogConfig {
        base_url,
        api_token,
        language: env.language.clone().or(file_catalog.language),
        request_timeout,
    };

    let debounce = match env.debounce_ms.as_deref() {
        Some(raw) => {
            let millis = raw.parse::<u64>().map_err(|source| {
                ConfigLoadError::InvalidNumber {
                    key: "REELSCOUT_DEBOUNCE_MS",
                    value: raw.to_string(),
                    source,
                }
            })?;
            Duration::from_millis(millis)
        }
        None => match file_session.debounce.as_deref() {
            Some(raw) => parse_duration("session.debounce", raw)?,
            None => DEFAULT_QUIET_PERIOD,
        },
    };

    let mut max_total_pages = file_session.max_total_pages.unwrap_or(MAX_TOTAL_PAGES);
    if max_total_pages == 0 || max_total_pages > MAX_TOTAL_PAGES {
        warnings.push_with_hint(
            format!("session.max_total_pages = {max_total_pages} is out of range"),
            format!("Use a value between 1 and {MAX_TOTAL_PAGES}"),
        );
        max_total_pages = max_total_pages.clamp(1, MAX_TOTAL_PAGES);
    }

    let session = SessionConfig {
        debounce,
        max_total_pages,
        trending_limit: file_session
            .trending_limit
            .unwrap_or(SessionConfig::default().trending_limit),
    };

    let storage = StorageConfig {
        data_dir: env
            .data_dir
            .clone()
            .or(file_storage.data_dir)
            .unwrap_or_else(default_data_dir),
    };

    Ok(ConfigLoad {
        config: DiscoveryConfig {
            catalog,
            session,
            storage,
            metadata,
        },
        warnings,
    })
}

fn validate_base_url(raw: &str) -> Result<String, ConfigLoadError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            value: raw.to_string(),
            source,
        }
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigLoadError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

fn parse_duration(key: &'static str, raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw).map_err(|source| ConfigLoadError::InvalidDuration {
        key,
        value: raw.to_string(),
        source,
    })
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },

    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid catalog base URL '{value}'")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("catalog base URL must use http or https, got '{scheme}'")]
    UnsupportedScheme { scheme: String },

    #[error("invalid duration for {key}: '{value}'")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("invalid number for {key}: '{value}'")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: DiscoveryConfig,
    pub warnings: ConfigWarnings,
}
