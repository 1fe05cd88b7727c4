//! Conversation management for the AGi Sentinel chat
//!
//! This crate wires user input to the history store and the backend client,
//! and drives whatever front-end implements [`ChatView`].

pub mod command;
pub mod controller;
pub mod view;

pub use command::Command;
pub use controller::{ConversationController, SubmitOutcome};
pub use view::{BusyGuard, ChatView, Status};

// Re-export the pieces a front-end needs to assemble a controller
pub use sentinel_api::{Backend, BackendReply, Endpoints, HttpBackend};
pub use sentinel_history::{FileStore, HistoryStore, KeyValueStore, MemoryStore, StorageError};
pub use sentinel_types::{QuickAction, Role, Turn, QUICK_ACTIONS};
