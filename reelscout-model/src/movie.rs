use crate::ids::MovieId;

/// Lightweight movie record as returned by search and discover listings.
///
/// Field names follow the catalog's wire format so a persisted favorites set
/// round-trips through the same JSON shape the catalog emits.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub vote_average: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub poster_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub original_language: String,
}

impl MovieSummary {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Year prefix of `release_date` (`"2008-07-16"` -> `"2008"`).
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    /// Rating with one decimal, or `N/A` when the catalog has none.
    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }
}

pub(crate) fn release_year(date: Option<&str>) -> Option<&str> {
    let date = date?;
    let year = date.split('-').next()?;
    if year.is_empty() { None } else { Some(year) }
}

pub(crate) fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(value) if value > 0.0 => format!("{value:.1}"),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_takes_date_prefix() {
        let mut movie = MovieSummary::new(155, "The Dark Knight");
        assert_eq!(movie.release_year(), None);

        movie.release_date = Some("2008-07-16".into());
        assert_eq!(movie.release_year(), Some("2008"));

        movie.release_date = Some(String::new());
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn rating_label_falls_back_to_na() {
        let mut movie = MovieSummary::new(155, "The Dark Knight");
        assert_eq!(movie.rating_label(), "N/A");

        movie.vote_average = Some(8.516);
        assert_eq!(movie.rating_label(), "8.5");

        movie.vote_average = Some(0.0);
        assert_eq!(movie.rating_label(), "N/A");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_catalog_listing_shape() {
        let json = r#"{
            "id": 268,
            "title": "Batman",
            "vote_average": 7.2,
            "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
            "release_date": "1989-06-21",
            "original_language": "en",
            "popularity": 41.3
        }"#;
        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, MovieId(268));
        assert_eq!(movie.release_year(), Some("1989"));
        assert_eq!(movie.original_language, "en");
    }
}
