//! Layered configuration: defaults, an optional TOML file, then environment.

pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CatalogConfig, ConfigMetadata, ConfigWarning, ConfigWarnings, DiscoveryConfig,
    SessionConfig, StorageConfig,
};
pub use sources::{EnvConfig, FileConfig};
