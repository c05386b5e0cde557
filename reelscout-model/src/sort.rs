use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Fields the catalog can order discover results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Popularity,
    VoteAverage,
    ReleaseDate,
    OriginalTitle,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Popularity => "popularity",
            SortField::VoteAverage => "vote_average",
            SortField::ReleaseDate => "release_date",
            SortField::OriginalTitle => "original_title",
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// The fixed catalog of (field, direction) pairs offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum SortOption {
    #[default]
    PopularityDesc,
    PopularityAsc,
    RatingDesc,
    RatingAsc,
    ReleaseDateDesc,
    ReleaseDateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortOption {
    pub fn all() -> &'static [SortOption] {
        use SortOption::*;
        &[
            PopularityDesc,
            PopularityAsc,
            RatingDesc,
            RatingAsc,
            ReleaseDateDesc,
            ReleaseDateAsc,
            TitleAsc,
            TitleDesc,
        ]
    }

    pub fn field(&self) -> SortField {
        match self {
            SortOption::PopularityDesc | SortOption::PopularityAsc => {
                SortField::Popularity
            }
            SortOption::RatingDesc | SortOption::RatingAsc => {
                SortField::VoteAverage
            }
            SortOption::ReleaseDateDesc | SortOption::ReleaseDateAsc => {
                SortField::ReleaseDate
            }
            SortOption::TitleAsc | SortOption::TitleDesc => {
                SortField::OriginalTitle
            }
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortOption::PopularityDesc
            | SortOption::RatingDesc
            | SortOption::ReleaseDateDesc
            | SortOption::TitleDesc => SortDirection::Descending,
            SortOption::PopularityAsc
            | SortOption::RatingAsc
            | SortOption::ReleaseDateAsc
            | SortOption::TitleAsc => SortDirection::Ascending,
        }
    }

    /// Wire value, e.g. `vote_average.desc`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PopularityDesc => "popularity.desc",
            SortOption::PopularityAsc => "popularity.asc",
            SortOption::RatingDesc => "vote_average.desc",
            SortOption::RatingAsc => "vote_average.asc",
            SortOption::ReleaseDateDesc => "release_date.desc",
            SortOption::ReleaseDateAsc => "release_date.asc",
            SortOption::TitleAsc => "original_title.asc",
            SortOption::TitleDesc => "original_title.desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::PopularityDesc => "Popularity (High to Low)",
            SortOption::PopularityAsc => "Popularity (Low to High)",
            SortOption::RatingDesc => "Rating (High to Low)",
            SortOption::RatingAsc => "Rating (Low to High)",
            SortOption::ReleaseDateDesc => "Release Date (Newest)",
            SortOption::ReleaseDateAsc => "Release Date (Oldest)",
            SortOption::TitleAsc => "Title (A-Z)",
            SortOption::TitleDesc => "Title (Z-A)",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| ModelError::UnknownSortOption(s.to_string()))
    }
}

impl TryFrom<String> for SortOption {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOption> for String {
    fn from(value: SortOption) -> Self {
        value.as_str().to_string()
    }
}
