use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reelscout_model::{MovieSummary, PosterSize, TrendingEntry, poster_url};

use super::TrendingBackend;
use crate::error::TrendingError;
use crate::persistence::{KeyValueStore, read_json, write_json};

pub const TRENDING_KEY: &str = "trendingSearches";

/// Trending aggregation kept in a local key-value slot.
#[derive(Debug)]
pub struct LocalTrendingBackend {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl LocalTrendingBackend {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    fn entries(&self) -> Result<Vec<TrendingEntry>, TrendingError> {
        Ok(read_json(self.store.as_ref(), TRENDING_KEY)?.unwrap_or_default())
    }
}

#[async_trait]
impl TrendingBackend for LocalTrendingBackend {
    async fn record_search(
        &self,
        term: &str,
        top: &MovieSummary,
    ) -> Result<(), TrendingError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.entries()?;

        match entries.iter_mut().find(|entry| entry.search_term == term) {
            Some(entry) => entry.count += 1,
            None => entries.push(TrendingEntry {
                search_term: term.to_string(),
                count: 1,
                movie_id: top.id,
                title: top.title.clone(),
                poster_url: top
                    .poster_path
                    .as_deref()
                    .map(|path| poster_url(path, PosterSize::W500)),
            }),
        }

        write_json(self.store.as_ref(), TRENDING_KEY, &entries)?;
        Ok(())
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError> {
        let mut entries = self.entries()?;
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.search_term.cmp(&b.search_term))
        });
        entries.truncate(limit);
        Ok(entries)
    }
}
