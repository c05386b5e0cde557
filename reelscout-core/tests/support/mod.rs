#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reelscout_core::error::{FetchError, TrendingError};
use reelscout_core::providers::{CatalogResponse, CatalogService};
use reelscout_core::query::QueryDescriptor;
use reelscout_core::trending::TrendingBackend;
use reelscout_model::{MovieDetail, MovieId, MovieSummary, TrendingEntry};
use tokio::sync::{Notify, oneshot};

pub fn movie(id: u64, title: &str) -> MovieSummary {
    let mut movie = MovieSummary::new(id, title);
    movie.vote_average = Some(7.0);
    movie.release_date = Some("2001-01-01".into());
    movie.original_language = "en".into();
    movie
}

pub fn detail(id: u64, title: &str) -> MovieDetail {
    MovieDetail {
        id: MovieId(id),
        title: title.to_string(),
        ..MovieDetail::default()
    }
}

/// A request parked until the test decides how it resolves.
pub struct Pending<Req, Resp> {
    pub request: Req,
    responder: oneshot::Sender<Resp>,
}

impl<Req, Resp> Pending<Req, Resp> {
    pub fn respond(self, response: Resp) {
        let _ = self.responder.send(response);
    }
}

struct Gate<Req, Resp> {
    queue: Mutex<VecDeque<Pending<Req, Resp>>>,
    arrived: Notify,
}

impl<Req, Resp> Default for Gate<Req, Resp> {
    fn default() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            arrived: Notify::new(),
        }
    }
}

impl<Req, Resp> Gate<Req, Resp> {
    fn park(&self, request: Req) -> oneshot::Receiver<Resp> {
        let (responder, rx) = oneshot::channel();
        self.queue.lock().push_back(Pending { request, responder });
        self.arrived.notify_one();
        rx
    }

    async fn next(&self) -> Pending<Req, Resp> {
        loop {
            if let Some(pending) = self.queue.lock().pop_front() {
                return pending;
            }
            self.arrived.notified().await;
        }
    }
}

/// Catalog whose calls block until the test resolves them, in any order.
#[derive(Default)]
pub struct GatedCatalog {
    queries: Gate<QueryDescriptor, Result<CatalogResponse, FetchError>>,
    details: Gate<MovieId, Result<MovieDetail, FetchError>>,
}

pub type PendingQuery = Pending<QueryDescriptor, Result<CatalogResponse, FetchError>>;
pub type PendingDetail = Pending<MovieId, Result<MovieDetail, FetchError>>;

impl GatedCatalog {
    pub async fn next_query(&self) -> PendingQuery {
        self.queries.next().await
    }

    /// Wait for `n` queries and return them keyed by arrival order.
    pub async fn next_queries(&self, n: usize) -> Vec<PendingQuery> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.queries.next().await);
        }
        out
    }

    pub async fn next_detail(&self) -> PendingDetail {
        self.details.next().await
    }
}

#[async_trait]
impl CatalogService for GatedCatalog {
    async fn query_movies(
        &self,
        query: &QueryDescriptor,
    ) -> Result<CatalogResponse, FetchError> {
        self.queries
            .park(query.clone())
            .await
            .unwrap_or_else(|_| Err(FetchError::Unexpected("request abandoned".into())))
    }

    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, FetchError> {
        self.details
            .park(id)
            .await
            .unwrap_or_else(|_| Err(FetchError::Unexpected("request abandoned".into())))
    }
}

type QueryScript = dyn Fn(&QueryDescriptor) -> Result<CatalogResponse, FetchError> + Send + Sync;
type DetailScript = dyn Fn(MovieId) -> Result<MovieDetail, FetchError> + Send + Sync;

/// Catalog that answers immediately from closures and records every query.
pub struct ScriptedCatalog {
    on_query: Box<QueryScript>,
    on_detail: Box<DetailScript>,
    seen: Mutex<Vec<QueryDescriptor>>,
}

impl ScriptedCatalog {
    pub fn new(
        on_query: impl Fn(&QueryDescriptor) -> Result<CatalogResponse, FetchError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            on_query: Box::new(on_query),
            on_detail: Box::new(|id: MovieId| -> Result<MovieDetail, FetchError> {
                Ok(detail(id.as_u64(), "Untitled"))
            }),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Every query answers with `items` and `total_pages`.
    pub fn fixed(items: Vec<MovieSummary>, total_pages: u32) -> Self {
        Self::new(move |_| Ok(CatalogResponse::results(items.clone(), total_pages)))
    }

    pub fn with_detail(
        mut self,
        on_detail: impl Fn(MovieId) -> Result<MovieDetail, FetchError> + Send + Sync + 'static,
    ) -> Self {
        self.on_detail = Box::new(on_detail);
        self
    }

    pub fn queries(&self) -> Vec<QueryDescriptor> {
        self.seen.lock().clone()
    }

    pub fn last_query(&self) -> Option<QueryDescriptor> {
        self.seen.lock().last().cloned()
    }
}

#[async_trait]
impl CatalogService for ScriptedCatalog {
    async fn query_movies(
        &self,
        query: &QueryDescriptor,
    ) -> Result<CatalogResponse, FetchError> {
        self.seen.lock().push(query.clone());
        (self.on_query)(query)
    }

    async fn movie_detail(&self, id: MovieId) -> Result<MovieDetail, FetchError> {
        (self.on_detail)(id)
    }
}

/// Trending backend that records reports and never fails.
#[derive(Default)]
pub struct RecordingTrending {
    reports: Mutex<Vec<(String, MovieId)>>,
}

impl RecordingTrending {
    pub fn reports(&self) -> Vec<(String, MovieId)> {
        self.reports.lock().clone()
    }
}

#[async_trait]
impl TrendingBackend for RecordingTrending {
    async fn record_search(
        &self,
        term: &str,
        top: &MovieSummary,
    ) -> Result<(), TrendingError> {
        self.reports.lock().push((term.to_string(), top.id));
        Ok(())
    }

    async fn top_searches(&self, limit: usize) -> Result<Vec<TrendingEntry>, TrendingError> {
        let mut entries: Vec<TrendingEntry> = Vec::new();
        for (term, movie_id) in self.reports.lock().iter() {
            match entries.iter_mut().find(|e| &e.search_term == term) {
                Some(entry) => entry.count += 1,
                None => entries.push(TrendingEntry {
                    search_term: term.clone(),
                    count: 1,
                    movie_id: *movie_id,
                    title: String::new(),
                    poster_url: None,
                }),
            }
        }
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(limit);
        Ok(entries)
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
