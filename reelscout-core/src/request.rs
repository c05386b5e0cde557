//! Request lifecycle state with last-request-wins commits.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::FetchError;

/// Lifecycle of one logical request stream (catalog or detail).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(FetchError),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Identifies one issued request. Only the latest ticket may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What became of a completed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Committed,
    /// A newer request was issued first; the result was discarded.
    Superseded,
    /// Nothing was requested (e.g. an unselectable id).
    Skipped,
}

#[derive(Debug)]
struct SlotInner<T> {
    generation: u64,
    state: RequestState<T>,
    last_success: Option<T>,
}

/// Shared request state guarded by a generation counter.
///
/// Issuing a ticket and committing a result both happen under one lock, so a
/// stale completion can never land after a newer request moved the slot to
/// `Loading`.
#[derive(Debug)]
pub struct RequestSlot<T> {
    inner: Arc<Mutex<SlotInner<T>>>,
}

impl<T> Clone for RequestSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotInner {
                generation: 0,
                state: RequestState::Idle,
                last_success: None,
            })),
        }
    }
}

impl<T: Clone> RequestSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede anything in flight and move to `Loading`.
    pub fn begin(&self) -> RequestTicket {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state = RequestState::Loading;
        RequestTicket(inner.generation)
    }

    /// Commit a result if `ticket` is still the latest. Returns whether it landed.
    ///
    /// A domain failure also drops the retained last success.
    pub fn complete(
        &self,
        ticket: RequestTicket,
        outcome: Result<T, FetchError>,
    ) -> bool {
        let mut inner = self.inner.lock();
        if inner.generation != ticket.0 {
            return false;
        }
        match outcome {
            Ok(value) => {
                inner.last_success = Some(value.clone());
                inner.state = RequestState::Succeeded(value);
            }
            Err(err) => {
                if err.is_domain() {
                    inner.last_success = None;
                }
                inner.state = RequestState::Failed(err);
            }
        }
        true
    }

    /// Back to `Idle`, invalidating any in-flight ticket.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.state = RequestState::Idle;
        inner.last_success = None;
    }

    pub fn state(&self) -> RequestState<T> {
        self.inner.lock().state.clone()
    }

    /// State and last success read under one lock.
    pub fn snapshot(&self) -> (RequestState<T>, Option<T>) {
        let inner = self.inner.lock();
        (inner.state.clone(), inner.last_success.clone())
    }

    /// Most recent committed value, kept through later `Loading` and
    /// non-domain failures.
    pub fn last_success(&self) -> Option<T> {
        self.inner.lock().last_success.clone()
    }
}
