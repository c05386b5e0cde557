use async_trait::async_trait;
use reelscout_model::{MovieDetail, MovieId, MovieSummary};

use crate::error::FetchError;
use crate::query::QueryDescriptor;

/// A catalog answer decoded at the provider boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogResponse {
    /// `total_pages` is exactly what the service reported; clamping happens
    /// in the controller.
    Results {
        items: Vec<MovieSummary>,
        total_pages: u32,
    },
    /// The service answered successfully but reported a failure in-band.
    DomainFailure { message: String },
}

impl CatalogResponse {
    pub fn results(items: Vec<MovieSummary>, total_pages: u32) -> Self {
        CatalogResponse::Results { items, total_pages }
    }

    pub fn domain_failure(message: impl Into<String>) -> Self {
        CatalogResponse::DomainFailure {
            message: message.into(),
        }
    }
}

/// Remote movie catalog consumed by the controllers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Run a search or discover query.
    async fn query_movies(
        &self,
        query: &QueryDescriptor,
    ) -> Result<CatalogResponse, FetchError>;

    /// Extended record including cast and videos.
    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, FetchError>;
}
