//! Search-hit reporting and the trending list derived from it.

pub mod local;

pub use local::{LocalTrendingBackend, TRENDING_KEY};

use std::sync::Arc;

use async_trait::async_trait;
use reelscout_model::{MovieSummary, TrendingEntry};
use tracing::{debug, warn};

use crate::error::TrendingError;

/// Aggregation backend counting which search terms produced hits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendingBackend: Send + Sync {
    /// Count one hit for `term`, remembering `top` as its representative result.
    async fn record_search(
        &self,
        term: &str,
        top: &MovieSummary,
    ) -> Result<(), TrendingError>;

    /// Most-searched terms, highest count first.
    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError>;
}

/// Failure-absorbing front for a [`TrendingBackend`].
///
/// Reporting never fails from the caller's point of view; errors are logged.
#[derive(Clone)]
pub struct TrendingReporter {
    backend: Arc<dyn TrendingBackend>,
}

impl std::fmt::Debug for TrendingReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendingReporter").finish_non_exhaustive()
    }
}

impl TrendingReporter {
    pub fn new(backend: Arc<dyn TrendingBackend>) -> Self {
        Self { backend }
    }

    pub async fn report(&self, term: &str, top: &MovieSummary) {
        match self.backend.record_search(term, top).await {
            Ok(()) => debug!(term, movie_id = %top.id, "search hit reported"),
            Err(err) => warn!(term, error = %err, "failed to report search hit"),
        }
    }

    /// Trending list, empty when the backend is unavailable.
    pub async fn trending(&self, limit: usize) -> Vec<TrendingEntry> {
        match self.backend.top_searches(limit).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to load trending searches");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelscout_model::MovieId;

    #[tokio::test]
    async fn report_absorbs_backend_failures() {
        let mut backend = MockTrendingBackend::new();
        backend
            .expect_record_search()
            .withf(|term, top| term == "batman" && top.id == MovieId(1))
            .times(1)
            .returning(|_, _| Err(TrendingError::Unavailable("offline".into())));

        let reporter = TrendingReporter::new(Arc::new(backend));
        reporter.report("batman", &MovieSummary::new(1u64, "Batman")).await;
    }

    #[tokio::test]
    async fn trending_is_empty_when_backend_fails() {
        let mut backend = MockTrendingBackend::new();
        backend
            .expect_top_searches()
            .returning(|_| Err(TrendingError::Unavailable("offline".into())));

        let reporter = TrendingReporter::new(Arc::new(backend));
        assert!(reporter.trending(5).await.is_empty());
    }
}
