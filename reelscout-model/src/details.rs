use crate::ids::{GenreId, MovieId};
use crate::movie::{MovieSummary, rating_label, release_year};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreInfo {
    pub id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub character: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_path: Option<String>,
}

/// A media reference attached to a movie (trailer, teaser, clip).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

impl Video {
    pub fn is_youtube_trailer(&self) -> bool {
        self.kind == "Trailer" && self.site == "YouTube"
    }

    /// Embeddable URL for YouTube-hosted videos.
    pub fn embed_url(&self) -> Option<String> {
        (self.site == "YouTube")
            .then(|| format!("https://www.youtube.com/embed/{}", self.key))
    }
}

/// Extended movie record fetched lazily when the detail view opens.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub id: MovieId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub vote_average: Option<f64>,
    pub poster_path: Option<String>,
    pub original_language: String,
    pub genres: Vec<GenreInfo>,
    pub cast: Vec<CastMember>,
    pub videos: Vec<Video>,
}

impl MovieDetail {
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }

    pub fn rating_label(&self) -> String {
        rating_label(self.vote_average)
    }

    /// First `limit` billed cast members.
    pub fn top_cast(&self, limit: usize) -> &[CastMember] {
        &self.cast[..self.cast.len().min(limit)]
    }

    /// The official YouTube trailer if one exists, otherwise the first video.
    pub fn featured_video(&self) -> Option<&Video> {
        self.videos
            .iter()
            .find(|video| video.is_youtube_trailer())
            .or_else(|| self.videos.first())
    }

    /// Listing projection, used when favoriting from the detail view.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            vote_average: self.vote_average,
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            original_language: self.original_language.clone(),
        }
    }
}
