pub mod builder;
pub mod types;

pub use builder::{CatalogQueryBuilder, build_query};
pub use types::*;
