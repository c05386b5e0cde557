//! # Reelscout Core
//!
//! Catalog query and state-synchronization engine for the reelscout movie
//! discovery client.
//!
//! ## Overview
//!
//! - **Query building**: search text, filters, sort and page become one
//!   [`QueryDescriptor`](query::QueryDescriptor)
//! - **Debouncing**: search keystrokes settle for a quiet period before they
//!   reach the catalog
//! - **Supersession**: overlapping requests resolve last-request-wins through
//!   generation-tagged [`RequestSlot`](request::RequestSlot)s
//! - **Local state**: favorites and trending searches persist through a
//!   key-value store
//! - **Providers**: a TMDB-style REST catalog behind the
//!   [`CatalogService`](providers::CatalogService) trait
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reelscout_core::{
//!     config::ConfigLoader,
//!     persistence::JsonFileStore,
//!     providers::TmdbCatalog,
//!     session::DiscoverySession,
//!     trending::LocalTrendingBackend,
//! };
//!
//! async fn popular() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load()?.config;
//!     let store = Arc::new(JsonFileStore::open(&config.storage.data_dir)?);
//!     let session = DiscoverySession::new(
//!         Arc::new(TmdbCatalog::new(&config.catalog)?),
//!         Arc::new(LocalTrendingBackend::new(store.clone())),
//!         store,
//!         &config.session,
//!     );
//!
//!     session.refresh().await?;
//!     for movie in session.view().results {
//!         println!("{} ({})", movie.title, movie.rating_label());
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Fetch controllers for the result list and the detail view
pub mod catalog;

/// Layered configuration loading
pub mod config;

/// Trailing-edge debounce for search input
pub mod debounce;

/// Error types and user-facing messages
pub mod error;

/// Locally persisted favorites
pub mod favorites;

/// Page clamping and page controls
pub mod pagination;

/// Durable key-value slots
pub mod persistence;

/// Remote catalog providers
pub mod providers;

/// Query descriptors and the query builder
pub mod query;

/// Request lifecycle and supersession
pub mod request;

/// Root session coordinator and its view snapshot
pub mod session;

/// Search-hit reporting and trending aggregation
pub mod trending;

pub use error::{FetchError, Result, StorageError, TrendingError};
pub use request::{FetchOutcome, RequestState};
pub use session::{DiscoverySession, SessionState, SessionView};
