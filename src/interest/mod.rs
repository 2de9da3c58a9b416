pub mod map;
pub mod store;
pub mod tracker;

pub use map::InterestMap;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, UnavailableStore};
pub use tracker::{InterestTracker, INTERESTS_KEY};
