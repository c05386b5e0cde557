use reelscout_model::{
    FilterSet, MovieDetail, MovieId, MovieSummary, SortOption, TrendingEntry,
};

use crate::catalog::CatalogPage;
use crate::pagination::PageControls;
use crate::request::RequestState;

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub search_text: String,
    pub debounced_search_text: String,
    pub filters: FilterSet,
    pub sort: SortOption,
    pub page: u32,

    pub catalog: RequestState<CatalogPage>,
    /// Latest committed list; survives loading and non-domain failures.
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    /// `None` when there is at most one page.
    pub page_controls: Option<PageControls>,
    /// Filters and sort only apply in discover mode.
    pub show_filters: bool,
    pub has_active_filters: bool,
    pub error_message: Option<String>,

    pub favorites: Vec<MovieSummary>,
    pub trending: Vec<TrendingEntry>,

    pub selected_id: Option<MovieId>,
    pub selected: Option<MovieSummary>,
    pub detail: RequestState<MovieDetail>,
    pub detail_error: Option<&'static str>,
}

impl SessionView {
    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.iter().any(|fav| fav.id == id)
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected_id.is_some()
    }

    pub fn is_search(&self) -> bool {
        !self.debounced_search_text.is_empty()
    }

    pub fn detail_record(&self) -> Option<&MovieDetail> {
        self.detail.value()
    }
}
