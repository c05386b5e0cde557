//! Core data model definitions shared across reelscout crates.
#![allow(missing_docs)]

pub mod details;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod image;
pub mod movie;
pub mod sort;
pub mod trending;

// Intentionally curated re-exports for downstream consumers.
pub use details::{CastMember, GenreInfo, MovieDetail, Video};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{FilterSet, UiGenre};
pub use ids::{GenreId, MovieId};
pub use image::{PosterSize, poster_url};
pub use movie::MovieSummary;
pub use sort::{SortDirection, SortField, SortOption};
pub use trending::TrendingEntry;
