pub mod tmdb;
pub mod traits;

pub use tmdb::TmdbCatalog;
pub use traits::{CatalogResponse, CatalogService};

#[cfg(test)]
pub use traits::MockCatalogService;
