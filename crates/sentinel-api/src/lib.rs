//! # sentinel-api
//!
//! Client for the two backend services the chat talks to:
//! - `POST /chat` for AI completions over the recent history
//! - `POST /browse` for the readable text of a web page
//!
//! Every failure is normalized into a [`BackendReply`] with a user-facing
//! message, so callers never handle transport errors themselves.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sentinel_api::{Backend, Endpoints, HttpBackend};
//! use sentinel_types::Turn;
//!
//! # async fn run() {
//! let backend = HttpBackend::new(Endpoints::local());
//! let reply = backend.send_chat(&[Turn::user("hola")]).await;
//! if reply.ok {
//!     println!("{} ({})", reply.text, reply.model_label());
//! }
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;

pub use client::Backend;
pub use endpoints::{Endpoints, LOCAL_BASE_URL, REMOTE_BASE_URL};
pub use error::BackendError;
pub use http::{BrowseRequest, BrowseResponse, ChatCompletion, ChatRequest, HttpBackend};
pub use sentinel_types::BackendReply;
