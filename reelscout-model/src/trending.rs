use crate::ids::MovieId;

/// One row of the trending list: a search term and how often it produced a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendingEntry {
    pub search_term: String,
    pub count: u64,
    pub movie_id: MovieId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_url: Option<String>,
}
