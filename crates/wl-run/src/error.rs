//! Error types for wl-run

use std::time::Duration;
use thiserror::Error;
use wl_core::InvocationState;
use wl_remote::RemoteError;

/// Invocation planning/monitoring errors
#[derive(Error, Debug)]
pub enum RunError {
    /// W001: Polling exceeded the caller's timeout. The invocation is left
    /// in its last observed state on the remote side; whether to keep
    /// polling or treat this as failure is the caller's decision.
    #[error(
        "[W001] Invocation {invocation} still {last_state} after {}s; \
         it continues to run remotely",
        .waited.as_secs()
    )]
    Timeout {
        invocation: String,
        last_state: InvocationState,
        waited: Duration,
    },

    /// Remote service failure, propagated untouched
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type alias for RunError
pub type RunResult<T> = Result<T, RunError>;
