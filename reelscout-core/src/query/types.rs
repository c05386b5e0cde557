use reelscout_model::{GenreId, SortOption};

/// Fully-specified remote query. Search and discover are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryDescriptor {
    /// Free-text search; filters and sort do not apply.
    Search { text: String, page: u32 },
    /// Browse by filters and sort.
    Discover(DiscoverQuery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub sort: SortOption,
    pub page: u32,
    /// Empty means "no genre constraint"; never sent as an empty parameter.
    pub genres: Vec<GenreId>,
    pub year: Option<u16>,
}

/// Remote endpoint path and parameters for a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEndpoint {
    pub path: &'static str,
    pub params: Vec<(&'static str, String)>,
}

impl CatalogEndpoint {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl QueryDescriptor {
    pub fn page(&self) -> u32 {
        match self {
            QueryDescriptor::Search { page, .. } => *page,
            QueryDescriptor::Discover(query) => query.page,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, QueryDescriptor::Search { .. })
    }

    pub fn search_term(&self) -> Option<&str> {
        match self {
            QueryDescriptor::Search { text, .. } => Some(text),
            QueryDescriptor::Discover(_) => None,
        }
    }

    /// Path and query parameters understood by the catalog service.
    pub fn endpoint(&self) -> CatalogEndpoint {
        match self {
            QueryDescriptor::Search { text, page } => CatalogEndpoint {
                path: "search/movie",
                params: vec![("query", text.clone()), ("page", page.to_string())],
            },
            QueryDescriptor::Discover(query) => {
                let mut params = vec![
                    ("sort_by", query.sort.as_str().to_string()),
                    ("page", query.page.to_string()),
                ];
                if !query.genres.is_empty() {
                    let joined = query
                        .genres
                        .iter()
                        .map(|g| g.to_string())
                        .collect::<Vec<_>>()
                        .join(",");
                    params.push(("with_genres", joined));
                }
                if let Some(year) = query.year {
                    params.push(("primary_release_year", year.to_string()));
                }
                CatalogEndpoint {
                    path: "discover/movie",
                    params,
                }
            }
        }
    }
}
