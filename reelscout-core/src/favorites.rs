//! Locally persisted favorites, keyed by movie id.

use std::sync::Arc;

use parking_lot::RwLock;
use reelscout_model::{MovieId, MovieSummary};
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::persistence::{KeyValueStore, read_json, write_json};

/// Slot holding the favorites as a JSON array of summaries.
pub const FAVORITES_KEY: &str = "movieFavorites";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// `set` with `movie` removed if an entry with its id is present, otherwise
/// appended. Order of the other entries is preserved.
pub fn toggled(set: &[MovieSummary], movie: &MovieSummary) -> Vec<MovieSummary> {
    if set.iter().any(|fav| fav.id == movie.id) {
        set.iter().filter(|fav| fav.id != movie.id).cloned().collect()
    } else {
        let mut next = set.to_vec();
        next.push(movie.clone());
        next
    }
}

/// Favorites set backed by a durable slot.
///
/// Every toggle writes the full set before the in-memory copy changes; a
/// failed write leaves both untouched.
#[derive(Debug)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
    items: RwLock<Vec<MovieSummary>>,
}

impl FavoritesStore {
    /// Load the persisted set. Unreadable content starts an empty set.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match read_json::<Vec<MovieSummary>>(store.as_ref(), FAVORITES_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable favorites");
                Vec::new()
            }
        };
        debug!(count = items.len(), "favorites loaded");
        Self {
            store,
            items: RwLock::new(items),
        }
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.items.read().iter().any(|fav| fav.id == id)
    }

    pub fn get(&self, id: MovieId) -> Option<MovieSummary> {
        self.items.read().iter().find(|fav| fav.id == id).cloned()
    }

    pub fn items(&self) -> Vec<MovieSummary> {
        self.items.read().clone()
    }

    pub fn toggle(&self, movie: &MovieSummary) -> Result<FavoriteChange, StorageError> {
        let mut items = self.items.write();
        let next = toggled(&items, movie);
        write_json(self.store.as_ref(), FAVORITES_KEY, &next)?;

        let change = if next.len() > items.len() {
            FavoriteChange::Added
        } else {
            FavoriteChange::Removed
        };
        *items = next;
        debug!(id = %movie.id, ?change, "favorite toggled");
        Ok(change)
    }
}
