//! Error types for wl-remote

use thiserror::Error;

/// Remote service operation errors.
///
/// Failures at this layer are never retried here; retry policy belongs to
/// the caller.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport failure (R001)
    #[error("[R001] Remote transport failed: {0}")]
    Transport(String),

    /// The service rejected the request (R002)
    #[error("[R002] Remote service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response could not be decoded (R003)
    #[error("[R003] Failed to decode remote response: {0}")]
    Decode(String),
}

/// Result type alias for RemoteError
pub type RemoteResult<T> = Result<T, RemoteError>;

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}
