//! Fetching the flat action list of a resolved compilation.

use log::info;
use std::sync::Arc;

use wl_core::CompilationAction;
use wl_remote::{RemoteResult, RemoteService};

/// One page covers any realistic project; the service contract assumes a
/// single page at this size.
const ACTION_PAGE_SIZE: u32 = 1000;

/// Retrieves compiled actions for a snapshot handle.
pub struct ActionFetcher {
    remote: Arc<dyn RemoteService>,
}

impl ActionFetcher {
    pub fn new(remote: Arc<dyn RemoteService>) -> Self {
        Self { remote }
    }

    /// Fetch the full action list of `compilation`. No retry beyond what the
    /// transport provides; failures propagate.
    pub async fn fetch(&self, compilation: &str) -> RemoteResult<Vec<CompilationAction>> {
        let actions = self
            .remote
            .query_compilation_actions(compilation, ACTION_PAGE_SIZE)
            .await?;
        info!("fetched {} actions from {}", actions.len(), compilation);
        Ok(actions)
    }
}
