//! Root coordinator for one discovery session.
//!
//! [`DiscoverySession`] owns the user-facing state (search text, filters,
//! sort, page, selection) and turns every effective change into exactly one
//! catalog request. Search text passes through the debounce relay first;
//! everything else issues immediately. Requests are started while the state
//! lock is held, so the order of tickets matches the order of state changes.

pub mod view;

pub use view::SessionView;

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use reelscout_model::{
    FilterSet, GenreId, MovieId, MovieSummary, SortOption, TrendingEntry,
};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::{CatalogController, CatalogPage, DETAIL_ERROR_MESSAGE, DetailController};
use crate::config::SessionConfig;
use crate::debounce::{DebouncedInput, debounced_channel};
use crate::error::{FetchError, StorageError};
use crate::favorites::{FavoriteChange, FavoritesStore};
use crate::pagination::{PageControls, clamp_page};
use crate::persistence::KeyValueStore;
use crate::providers::CatalogService;
use crate::query::{QueryDescriptor, build_query};
use crate::request::FetchOutcome;
use crate::trending::{TrendingBackend, TrendingReporter};

/// Handle to a spawned catalog or detail request.
pub type FetchHandle = JoinHandle<FetchOutcome>;

/// Inputs owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub search_text: String,
    pub debounced_search_text: String,
    pub filters: FilterSet,
    pub sort: SortOption,
    pub page: u32,
    pub selected_id: Option<MovieId>,
    pub selected: Option<MovieSummary>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            debounced_search_text: String::new(),
            filters: FilterSet::default(),
            sort: SortOption::default(),
            page: 1,
            selected_id: None,
            selected: None,
        }
    }
}

impl SessionState {
    /// The remote query these inputs describe.
    pub fn query(&self) -> QueryDescriptor {
        build_query(
            &self.debounced_search_text,
            &self.filters,
            self.sort,
            self.page,
        )
    }
}

/// Fluent constructor for [`DiscoverySession`].
pub struct SessionBuilder {
    catalog: Arc<dyn CatalogService>,
    trending: Arc<dyn TrendingBackend>,
    store: Arc<dyn KeyValueStore>,
    config: SessionConfig,
    initial: SessionState,
}

impl std::fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("config", &self.config)
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl SessionBuilder {
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Start with `text` already settled, skipping the debounce.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.initial.search_text = text.clone();
        self.initial.debounced_search_text = text;
        self
    }

    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.initial.filters = filters;
        self
    }

    pub fn sort(mut self, sort: SortOption) -> Self {
        self.initial.sort = sort;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.initial.page = page.max(1);
        self
    }

    /// Must run inside a tokio runtime: the debounce relay and its listener
    /// are spawned here. Nothing is fetched until the first action or
    /// [`DiscoverySession::refresh`].
    pub fn build(self) -> DiscoverySession {
        let reporter = TrendingReporter::new(self.trending);
        let catalog = CatalogController::new(Arc::clone(&self.catalog), reporter.clone())
            .with_max_total_pages(self.config.max_total_pages);
        let detail = DetailController::new(self.catalog);
        let favorites = FavoritesStore::load(self.store);
        let (search_input, mut settled, _relay) = debounced_channel(self.config.debounce);

        let inner = Arc::new(SessionInner {
            state: RwLock::new(self.initial),
            catalog,
            detail,
            favorites,
            reporter,
            trending: RwLock::new(Vec::new()),
            trending_limit: self.config.trending_limit,
            search_input,
        });

        let weak: Weak<SessionInner> = Arc::downgrade(&inner);
        tokio::spawn(async move {
            while let Some(text) = settled.recv().await {
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                DiscoverySession { inner }.settle_search(text);
            }
            debug!("search listener stopped");
        });

        DiscoverySession { inner }
    }
}

#[derive(Debug)]
struct SessionInner {
    state: RwLock<SessionState>,
    catalog: CatalogController,
    detail: DetailController,
    favorites: FavoritesStore,
    reporter: TrendingReporter,
    trending: RwLock<Vec<TrendingEntry>>,
    trending_limit: usize,
    search_input: DebouncedInput,
}

/// Cheap to clone; all clones share one session.
#[derive(Debug, Clone)]
pub struct DiscoverySession {
    inner: Arc<SessionInner>,
}

impl DiscoverySession {
    pub fn builder(
        catalog: Arc<dyn CatalogService>,
        trending: Arc<dyn TrendingBackend>,
        store: Arc<dyn KeyValueStore>,
    ) -> SessionBuilder {
        SessionBuilder {
            catalog,
            trending,
            store,
            config: SessionConfig::default(),
            initial: SessionState::default(),
        }
    }

    pub fn new(
        catalog: Arc<dyn CatalogService>,
        trending: Arc<dyn TrendingBackend>,
        store: Arc<dyn KeyValueStore>,
        config: &SessionConfig,
    ) -> Self {
        Self::builder(catalog, trending, store)
            .config(config.clone())
            .build()
    }

    // === Search ===

    /// Record a keystroke. The catalog sees it once the text settles.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.write().search_text = text.clone();
        self.inner.search_input.push(text);
    }

    /// Set and settle `text` immediately.
    pub fn submit_search(&self, text: impl Into<String>) -> Option<FetchHandle> {
        let text = text.into();
        self.set_search_text(text.clone());
        self.settle_search(text)
    }

    fn settle_search(&self, text: String) -> Option<FetchHandle> {
        let mut state = self.inner.state.write();
        if state.search_text != text || state.debounced_search_text == text {
            return None;
        }
        debug!(term = %text, "search text settled");
        state.debounced_search_text = text;
        state.page = 1;
        Some(self.issue(&state))
    }

    // === Filters and sort ===

    pub fn set_genres(&self, genres: impl IntoIterator<Item = GenreId>) -> Option<FetchHandle> {
        self.update_filters(|filters| filters.set_genres(genres))
    }

    pub fn toggle_genre(&self, genre: GenreId) -> Option<FetchHandle> {
        self.update_filters(|filters| filters.toggle_genre(genre))
    }

    pub fn set_year(&self, year: Option<u16>) -> Option<FetchHandle> {
        self.update_filters(|filters| filters.set_year(year))
    }

    /// Drop every filter and return to the default sort.
    pub fn clear_filters(&self) -> Option<FetchHandle> {
        let mut state = self.inner.state.write();
        if state.filters.is_empty() && state.sort == SortOption::default() {
            return None;
        }
        state.filters = FilterSet::default();
        state.sort = SortOption::default();
        state.page = 1;
        debug!("filters cleared");
        Some(self.issue(&state))
    }

    pub fn set_sort(&self, sort: SortOption) -> Option<FetchHandle> {
        let mut state = self.inner.state.write();
        if state.sort == sort {
            return None;
        }
        state.sort = sort;
        state.page = 1;
        debug!(sort = %sort, "sort changed");
        Some(self.issue(&state))
    }

    fn update_filters(&self, mutate: impl FnOnce(&mut FilterSet)) -> Option<FetchHandle> {
        let mut state = self.inner.state.write();
        let before = state.filters.clone();
        mutate(&mut state.filters);
        if state.filters == before {
            return None;
        }
        state.page = 1;
        debug!(filters = ?state.filters, "filters changed");
        Some(self.issue(&state))
    }

    // === Pagination ===

    /// Move to `page`, clamped to the known page count. No-op while the
    /// page count is unknown or when the clamped page is already current.
    pub fn set_page(&self, page: u32) -> Option<FetchHandle> {
        self.change_page(|_| page)
    }

    pub fn next_page(&self) -> Option<FetchHandle> {
        self.change_page(|current| current.saturating_add(1))
    }

    pub fn previous_page(&self) -> Option<FetchHandle> {
        self.change_page(|current| current.saturating_sub(1))
    }

    fn change_page(&self, target: impl FnOnce(u32) -> u32) -> Option<FetchHandle> {
        let total = self.inner.catalog.total_pages();
        if total == 0 {
            return None;
        }
        let mut state = self.inner.state.write();
        let page = clamp_page(target(state.page), total);
        if page == state.page {
            return None;
        }
        state.page = page;
        Some(self.issue(&state))
    }

    /// Re-issue the current query.
    pub fn refresh(&self) -> FetchHandle {
        let state = self.inner.state.read();
        self.issue(&state)
    }

    fn issue(&self, state: &SessionState) -> FetchHandle {
        self.inner.catalog.spawn_fetch(state.query())
    }

    // === Detail view ===

    /// Open the detail view for `id`. Invalid ids are ignored.
    pub fn select_movie(&self, id: MovieId) -> Option<FetchHandle> {
        if !id.is_valid() {
            return None;
        }
        let summary = self
            .inner
            .catalog
            .results()
            .into_iter()
            .find(|movie| movie.id == id)
            .or_else(|| self.inner.favorites.get(id));
        {
            let mut state = self.inner.state.write();
            state.selected_id = Some(id);
            state.selected = summary;
        }
        self.inner.detail.spawn_fetch(id)
    }

    pub fn close_detail(&self) {
        {
            let mut state = self.inner.state.write();
            state.selected_id = None;
            state.selected = None;
        }
        self.inner.detail.close();
    }

    // === Favorites ===

    pub fn toggle_favorite(&self, movie: &MovieSummary) -> Result<FavoriteChange, StorageError> {
        let change = self.inner.favorites.toggle(movie)?;
        info!(id = %movie.id, title = %movie.title, ?change, "favorites updated");
        Ok(change)
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.inner.favorites.contains(id)
    }

    pub fn favorites(&self) -> Vec<MovieSummary> {
        self.inner.favorites.items()
    }

    // === Trending ===

    /// Reload the trending list. Failures yield an empty list.
    pub async fn load_trending(&self) -> Vec<TrendingEntry> {
        let entries = self.inner.reporter.trending(self.inner.trending_limit).await;
        *self.inner.trending.write() = entries.clone();
        entries
    }

    pub fn trending(&self) -> Vec<TrendingEntry> {
        self.inner.trending.read().clone()
    }

    // === Observation ===

    pub fn state(&self) -> SessionState {
        self.inner.state.read().clone()
    }

    pub fn catalog(&self) -> &CatalogController {
        &self.inner.catalog
    }

    pub fn detail(&self) -> &DetailController {
        &self.inner.detail
    }

    pub fn view(&self) -> SessionView {
        let state = self.state();
        let (catalog, committed) = self.inner.catalog.snapshot();
        let CatalogPage {
            items: results,
            total_pages,
        } = committed.unwrap_or_default();
        let controls = PageControls::new(state.page, total_pages);
        let detail = self.inner.detail.state();
        let detail_error = detail.error().map(|_| DETAIL_ERROR_MESSAGE);

        SessionView {
            show_filters: state.debounced_search_text.is_empty(),
            has_active_filters: state.filters.has_active_filters(state.sort),
            error_message: catalog.error().map(FetchError::user_message),
            results,
            total_pages,
            page_controls: controls.visible().then_some(controls),
            catalog,
            favorites: self.inner.favorites.items(),
            trending: self.trending(),
            detail_error,
            detail,
            search_text: state.search_text,
            debounced_search_text: state.debounced_search_text,
            filters: state.filters,
            sort: state.sort,
            page: state.page,
            selected_id: state.selected_id,
            selected: state.selected,
        }
    }
}
