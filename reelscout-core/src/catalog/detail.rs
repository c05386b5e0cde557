use std::sync::Arc;

use reelscout_model::{MovieDetail, MovieId};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::providers::CatalogService;
use crate::request::{FetchOutcome, RequestSlot, RequestState, RequestTicket};

/// Shown in the detail view whenever the extended record cannot be loaded.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load movie details";

/// State machine for the detail view. Independent of the result list.
#[derive(Clone)]
pub struct DetailController {
    service: Arc<dyn CatalogService>,
    slot: RequestSlot<MovieDetail>,
}

impl std::fmt::Debug for DetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailController")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl DetailController {
    pub fn new(service: Arc<dyn CatalogService>) -> Self {
        Self {
            service,
            slot: RequestSlot::new(),
        }
    }

    /// Load the extended record for `id`. An invalid id does nothing.
    pub async fn fetch(&self, id: MovieId) -> FetchOutcome {
        match self.start(id) {
            Some(ticket) => self.run(ticket, id).await,
            None => FetchOutcome::Skipped,
        }
    }

    /// Like [`fetch`](Self::fetch) but resolved on a spawned task; `None`
    /// when nothing was requested.
    pub fn spawn_fetch(&self, id: MovieId) -> Option<JoinHandle<FetchOutcome>> {
        let ticket = self.start(id)?;
        let this = self.clone();
        Some(tokio::spawn(async move { this.run(ticket, id).await }))
    }

    fn start(&self, id: MovieId) -> Option<RequestTicket> {
        if !id.is_valid() {
            debug!(%id, "ignoring detail request for invalid id");
            return None;
        }
        Some(self.slot.begin())
    }

    async fn run(&self, ticket: RequestTicket, id: MovieId) -> FetchOutcome {
        debug!(generation = ticket.generation(), %id, "detail request issued");
        let result = self.service.movie_detail(id).await;
        if let Err(err) = &result {
            warn!(%id, error = %err, "detail request failed");
        }

        if self.slot.complete(ticket, result) {
            FetchOutcome::Committed
        } else {
            debug!(%id, "detail result superseded");
            FetchOutcome::Superseded
        }
    }

    /// Drop the current record and invalidate any in-flight request.
    pub fn close(&self) {
        self.slot.reset();
    }

    pub fn state(&self) -> RequestState<MovieDetail> {
        self.slot.state()
    }

    pub fn detail(&self) -> Option<MovieDetail> {
        self.slot.state().value().cloned()
    }
}
