use crate::error::ModelError;
use std::str::FromStr;

/// Catalog identifier of a movie. Summary and detail records share it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MovieId(pub u64);

impl MovieId {
    pub fn new(id: u64) -> Self {
        MovieId(id)
    }

    /// Zero is never issued by the catalog; selecting it is a no-op.
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        MovieId(value)
    }
}

impl FromStr for MovieId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(MovieId)
            .map_err(|_| ModelError::InvalidId(s.to_string()))
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog identifier of a genre (e.g. 28 = Action).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GenreId(pub u32);

impl GenreId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for GenreId {
    fn from(value: u32) -> Self {
        GenreId(value)
    }
}

impl std::fmt::Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
