use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::ids::GenreId;
use crate::sort::SortOption;

/// Genres offered by the filter panel, keyed by catalog genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiGenre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    ScienceFiction,
    Thriller,
}

impl UiGenre {
    pub fn all() -> &'static [UiGenre] {
        use UiGenre::*;
        &[
            Action,
            Adventure,
            Animation,
            Comedy,
            Crime,
            Drama,
            Fantasy,
            Horror,
            Romance,
            ScienceFiction,
            Thriller,
        ]
    }

    pub fn id(&self) -> GenreId {
        GenreId(match self {
            UiGenre::Action => 28,
            UiGenre::Adventure => 12,
            UiGenre::Animation => 16,
            UiGenre::Comedy => 35,
            UiGenre::Crime => 80,
            UiGenre::Drama => 18,
            UiGenre::Fantasy => 14,
            UiGenre::Horror => 27,
            UiGenre::Romance => 10749,
            UiGenre::ScienceFiction => 878,
            UiGenre::Thriller => 53,
        })
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            UiGenre::Action => "Action",
            UiGenre::Adventure => "Adventure",
            UiGenre::Animation => "Animation",
            UiGenre::Comedy => "Comedy",
            UiGenre::Crime => "Crime",
            UiGenre::Drama => "Drama",
            UiGenre::Fantasy => "Fantasy",
            UiGenre::Horror => "Horror",
            UiGenre::Romance => "Romance",
            UiGenre::ScienceFiction => "Science Fiction",
            UiGenre::Thriller => "Thriller",
        }
    }

    pub fn from_id(id: GenreId) -> Option<UiGenre> {
        Self::all().iter().copied().find(|genre| genre.id() == id)
    }
}

impl fmt::Display for UiGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Accepts either the numeric catalog id or the display name (case-insensitive).
impl FromStr for UiGenre {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        if let Ok(id) = raw.parse::<u32>() {
            return Self::from_id(GenreId(id))
                .ok_or_else(|| ModelError::UnknownGenre(s.to_string()));
        }
        Self::all()
            .iter()
            .copied()
            .find(|genre| {
                genre.api_name().eq_ignore_ascii_case(raw)
                    || genre
                        .api_name()
                        .replace(' ', "-")
                        .eq_ignore_ascii_case(raw)
            })
            .ok_or_else(|| ModelError::UnknownGenre(s.to_string()))
    }
}

/// Discover-mode filters. Genres keep selection order and never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSet {
    genres: Vec<GenreId>,
    year: Option<u16>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.set_genres(genres);
        self
    }

    pub fn with_year(mut self, year: Option<u16>) -> Self {
        self.year = year;
        self
    }

    pub fn genres(&self) -> &[GenreId] {
        &self.genres
    }

    pub fn year(&self) -> Option<u16> {
        self.year
    }

    pub fn set_genres(&mut self, genres: impl IntoIterator<Item = GenreId>) {
        self.genres.clear();
        for genre in genres {
            if !self.genres.contains(&genre) {
                self.genres.push(genre);
            }
        }
    }

    /// Adds the genre if absent, removes it otherwise.
    pub fn toggle_genre(&mut self, genre: GenreId) {
        if let Some(pos) = self.genres.iter().position(|g| *g == genre) {
            self.genres.remove(pos);
        } else {
            self.genres.push(genre);
        }
    }

    pub fn set_year(&mut self, year: Option<u16>) {
        self.year = year;
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.year.is_none()
    }

    /// True when any filter is set or the sort differs from the default.
    pub fn has_active_filters(&self, sort: SortOption) -> bool {
        !self.is_empty() || sort != SortOption::default()
    }
}
