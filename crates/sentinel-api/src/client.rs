use async_trait::async_trait;
use sentinel_types::{BackendReply, Turn};

/// The chat and browse services, as seen by the conversation controller.
///
/// Implementations make a single attempt per call and never fail: every
/// problem comes back as `BackendReply { ok: false, .. }`. Futures are not
/// required to be `Send`, so the same trait serves native and wasm builds.
#[async_trait(?Send)]
pub trait Backend {
    /// Ask for a completion over `turns`, oldest first
    async fn send_chat(&self, turns: &[Turn]) -> BackendReply;

    /// Fetch the readable text of the page at `url`
    async fn fetch_page(&self, url: &str) -> BackendReply;
}
