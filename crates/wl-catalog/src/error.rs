//! Error types for wl-catalog

use thiserror::Error;
use wl_remote::RemoteError;

/// Catalog construction errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// G001: Lazy loading found no qualifying compilation. Fatal: lazy mode
    /// assumes an external process (CI/CD) already compiled the environment.
    #[error(
        "[G001] No existing compilation found for environment '{environment}'. \
         Lazy loading requires a compilation to already exist on the remote \
         service (created by CI/CD or an external process)."
    )]
    MissingCompilation { environment: String },

    /// Remote service failure, propagated untouched
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type alias for CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
