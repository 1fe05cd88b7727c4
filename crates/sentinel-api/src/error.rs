use thiserror::Error;

/// Why a backend call failed, before it is turned into a user-facing message
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("could not reach backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    pub fn is_transport(&self) -> bool {
        matches!(self, BackendError::Transport(_))
    }
}
