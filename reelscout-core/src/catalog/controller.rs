use std::sync::Arc;

use reelscout_model::MovieSummary;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::pagination::{MAX_TOTAL_PAGES, clamp_total_pages};
use crate::providers::{CatalogResponse, CatalogService};
use crate::query::QueryDescriptor;
use crate::request::{FetchOutcome, RequestSlot, RequestState, RequestTicket};
use crate::trending::TrendingReporter;

/// One committed page of results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogPage {
    pub items: Vec<MovieSummary>,
    /// Already clamped to the configured ceiling.
    pub total_pages: u32,
}

/// State machine for the result list.
#[derive(Clone)]
pub struct CatalogController {
    service: Arc<dyn CatalogService>,
    reporter: TrendingReporter,
    slot: RequestSlot<CatalogPage>,
    max_total_pages: u32,
}

impl std::fmt::Debug for CatalogController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogController")
            .field("slot", &self.slot)
            .field("max_total_pages", &self.max_total_pages)
            .finish_non_exhaustive()
    }
}

impl CatalogController {
    pub fn new(service: Arc<dyn CatalogService>, reporter: TrendingReporter) -> Self {
        Self {
            service,
            reporter,
            slot: RequestSlot::new(),
            max_total_pages: MAX_TOTAL_PAGES,
        }
    }

    /// Lower the page ceiling. Values above the catalog's own limit are ignored.
    pub fn with_max_total_pages(mut self, ceiling: u32) -> Self {
        self.max_total_pages = ceiling.clamp(1, MAX_TOTAL_PAGES);
        self
    }

    /// Issue `query` and wait for it to resolve.
    pub async fn fetch(&self, query: QueryDescriptor) -> FetchOutcome {
        let ticket = self.slot.begin();
        self.run(ticket, query).await
    }

    /// Issue `query` now and resolve it on a spawned task.
    ///
    /// The ticket is taken before spawning, so requests supersede each other
    /// in call order regardless of task scheduling.
    pub fn spawn_fetch(&self, query: QueryDescriptor) -> JoinHandle<FetchOutcome> {
        let ticket = self.slot.begin();
        let this = self.clone();
        tokio::spawn(async move { this.run(ticket, query).await })
    }

    async fn run(&self, ticket: RequestTicket, query: QueryDescriptor) -> FetchOutcome {
        debug!(generation = ticket.generation(), ?query, "catalog request issued");

        let result = match self.service.query_movies(&query).await {
            Ok(CatalogResponse::Results { items, total_pages }) => Ok(CatalogPage {
                items,
                total_pages: clamp_total_pages(total_pages, self.max_total_pages),
            }),
            Ok(CatalogResponse::DomainFailure { message }) => Err(FetchError::Domain(message)),
            Err(err) => Err(err),
        };

        let top_hit = match (&result, query.search_term()) {
            (Ok(page), Some(term)) if !term.is_empty() => {
                page.items.first().map(|top| (term.to_string(), top.clone()))
            }
            _ => None,
        };

        match &result {
            Ok(page) => info!(
                generation = ticket.generation(),
                items = page.items.len(),
                total_pages = page.total_pages,
                "catalog request resolved"
            ),
            Err(err) => warn!(
                generation = ticket.generation(),
                error = %err,
                "catalog request failed"
            ),
        }

        if !self.slot.complete(ticket, result) {
            debug!(generation = ticket.generation(), "catalog result superseded");
            return FetchOutcome::Superseded;
        }

        if let Some((term, top)) = top_hit {
            self.reporter.report(&term, &top).await;
        }
        FetchOutcome::Committed
    }

    pub fn state(&self) -> RequestState<CatalogPage> {
        self.slot.state()
    }

    pub fn is_loading(&self) -> bool {
        self.slot.state().is_loading()
    }

    pub fn error(&self) -> Option<FetchError> {
        self.slot.state().error().cloned()
    }

    /// Latest committed result list; kept while a newer request is loading or
    /// after a non-domain failure.
    pub fn results(&self) -> Vec<MovieSummary> {
        self.slot
            .last_success()
            .map(|page| page.items)
            .unwrap_or_default()
    }

    /// Zero until a request has succeeded.
    pub fn total_pages(&self) -> u32 {
        self.slot
            .last_success()
            .map(|page| page.total_pages)
            .unwrap_or(0)
    }

    /// Request state and latest committed page, read together.
    pub fn snapshot(&self) -> (RequestState<CatalogPage>, Option<CatalogPage>) {
        self.slot.snapshot()
    }
}
