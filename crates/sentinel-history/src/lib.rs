//! Conversation history for the AGi Sentinel chat
//!
//! `HistoryStore` owns the ordered list of turns and keeps it in sync with a
//! `KeyValueStore` (a JSON file per key natively, `localStorage` in the browser).

pub mod error;
pub mod history;
pub mod store;


pub use error::{Result, StorageError};
pub use history::HistoryStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};
