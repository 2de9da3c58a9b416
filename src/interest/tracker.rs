use tracing::{debug, warn};

use super::map::InterestMap;
use super::store::{KeyValueStore, StoreError};
use crate::article::Category;

pub const INTERESTS_KEY: &str = "gujab_interests";

/// Records which categories a viewer engages with.
///
/// Fire-and-forget: storage failures are logged and swallowed, reads
/// degrade to an empty map.
#[derive(Debug)]
pub struct InterestTracker<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> InterestTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, INTERESTS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Count one view or like of an article in `category`.
    pub fn track(&self, category: Category) {
        if let Err(e) = self.try_track(category) {
            warn!(category = %category, error = %e, "interest not recorded");
        }
    }

    /// The persisted interest map, or an empty one if none is readable.
    pub fn interests(&self) -> InterestMap {
        match self.load() {
            Ok(map) => map,
            Err(e) => {
                warn!(key = %self.key, error = %e, "interest map unavailable");
                InterestMap::new()
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn try_track(&self, category: Category) -> Result<(), StoreError> {
        let mut map = self.load()?;
        map.record(category);
        let raw = serde_json::to_string(&map)?;
        self.store.set(&self.key, &raw)?;
        debug!(category = %category, count = map.affinity(category), "interest recorded");
        Ok(())
    }

    fn load(&self) -> Result<InterestMap, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(InterestMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                // Corrupt entries are overwritten on the next track.
                warn!(key = %self.key, error = %e, "discarding unreadable interest map");
                Ok(InterestMap::new())
            }
        }
    }
}
