//! Persistence module for desktop state
//!
//! Items, mode and scale are stored under independent keys of a string
//! key-value store (`localStorage` in the browser). Loading is forgiving:
//! anything missing or malformed reads as absent.

mod error;
mod snapshot;
mod storage;
mod store;

pub use error::PersistenceError;
pub use snapshot::ItemsSnapshot;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Persistence, ITEMS_KEY, MODE_KEY, SCALE_KEY};
