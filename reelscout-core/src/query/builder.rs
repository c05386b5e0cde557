use super::types::*;
use reelscout_model::{FilterSet, GenreId, SortOption};

/// Fluent API for building catalog queries
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    search: Option<String>,
    genres: Vec<GenreId>,
    year: Option<u16>,
    sort: SortOption,
    page: u32,
}

impl CatalogQueryBuilder {
    /// Create a new query builder
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    // === Search methods ===

    /// Add text search. An empty string leaves the query in discover mode.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = (!text.is_empty()).then_some(text);
        self
    }

    // === Filter methods ===

    /// Apply every field of a filter set
    pub fn filters(mut self, filters: &FilterSet) -> Self {
        self.genres = filters.genres().to_vec();
        self.year = filters.year();
        self
    }

    /// Filter by genre
    pub fn genre(mut self, genre: GenreId) -> Self {
        if !self.genres.contains(&genre) {
            self.genres.push(genre);
        }
        self
    }

    /// Filter by exact primary release year
    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    // === Pagination methods ===

    /// Set page (1-based; zero is treated as the first page)
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    // === Build method ===

    /// Build the final query
    pub fn build(self) -> QueryDescriptor {
        let page = self.page.max(1);
        match self.search {
            Some(text) => QueryDescriptor::Search { text, page },
            None => QueryDescriptor::Discover(DiscoverQuery {
                sort: self.sort,
                page,
                genres: self.genres,
                year: self.year,
            }),
        }
    }
}

/// Map the session inputs onto one remote query.
///
/// Non-empty search text selects search mode and ignores filters and sort.
pub fn build_query(
    search_text: &str,
    filters: &FilterSet,
    sort: SortOption,
    page: u32,
) -> QueryDescriptor {
    CatalogQueryBuilder::new()
        .search(search_text)
        .filters(filters)
        .sort_by(sort)
        .page(page)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_2020() -> FilterSet {
        FilterSet::new()
            .with_genres([GenreId(28)])
            .with_year(Some(2020))
    }

    #[test]
    fn search_text_ignores_filters_and_sort() {
        let query =
            build_query("batman", &action_2020(), SortOption::RatingDesc, 3);
        assert_eq!(
            query,
            QueryDescriptor::Search {
                text: "batman".into(),
                page: 3
            }
        );

        let endpoint = query.endpoint();
        assert_eq!(endpoint.path, "search/movie");
        assert_eq!(endpoint.param("query"), Some("batman"));
        assert_eq!(endpoint.param("page"), Some("3"));
        assert_eq!(endpoint.param("with_genres"), None);
        assert_eq!(endpoint.param("sort_by"), None);
        assert_eq!(endpoint.params.len(), 2);
    }

    #[test]
    fn discover_carries_filters_sort_and_page() {
        let query = build_query("", &action_2020(), SortOption::RatingDesc, 2);
        let endpoint = query.endpoint();

        assert!(!query.is_search());
        assert_eq!(query.search_term(), None);
        assert_eq!(endpoint.path, "discover/movie");
        assert_eq!(endpoint.param("sort_by"), Some("vote_average.desc"));
        assert_eq!(endpoint.param("page"), Some("2"));
        assert_eq!(endpoint.param("with_genres"), Some("28"));
        assert_eq!(endpoint.param("primary_release_year"), Some("2020"));
        assert_eq!(endpoint.param("query"), None);
    }

    #[test]
    fn discover_omits_empty_filter_fields() {
        let query =
            build_query("", &FilterSet::new(), SortOption::default(), 1);
        let endpoint = query.endpoint();
        assert_eq!(
            endpoint.params,
            vec![
                ("sort_by", "popularity.desc".to_string()),
                ("page", "1".to_string())
            ]
        );
    }

    #[test]
    fn genres_join_in_selection_order() {
        let filters =
            FilterSet::new().with_genres([GenreId(35), GenreId(28), GenreId(18)]);
        let endpoint =
            build_query("", &filters, SortOption::default(), 1).endpoint();
        assert_eq!(endpoint.param("with_genres"), Some("35,28,18"));
        assert_eq!(endpoint.param("primary_release_year"), None);
    }

    #[test]
    fn page_never_drops_below_one() {
        let query = build_query("", &FilterSet::new(), SortOption::default(), 0);
        assert_eq!(query.page(), 1);
        let query =
            build_query("alien", &FilterSet::new(), SortOption::default(), 0);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn fluent_builder_matches_pure_builder() {
        let fluent = CatalogQueryBuilder::new()
            .genre(GenreId(28))
            .genre(GenreId(28))
            .year(2020)
            .sort_by(SortOption::RatingDesc)
            .page(2)
            .build();
        assert_eq!(
            fluent,
            build_query("", &action_2020(), SortOption::RatingDesc, 2)
        );
    }
}
