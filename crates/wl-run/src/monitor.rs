//! Submitting invocations and polling them to a terminal state.

use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

use wl_core::InvocationRequest;
use wl_remote::{RemoteService, WorkflowInvocation};

use crate::error::{RunError, RunResult};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3600);

/// Submits a planned request and blocks the calling task until the
/// invocation reaches a terminal state or the timeout elapses.
///
/// Polling stops the moment a terminal state is observed. On timeout the
/// invocation keeps running remotely: this layer never cancels, and
/// `FAILED`/`CANCELLED` outcomes are returned as values rather than raised.
/// Retry and cancellation policy belong to the caller.
pub struct InvocationMonitor {
    remote: Arc<dyn RemoteService>,
    poll_interval: Duration,
    timeout: Duration,
}

impl InvocationMonitor {
    pub fn new(remote: Arc<dyn RemoteService>) -> Self {
        Self {
            remote,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Submit `request` and wait for the invocation to finish.
    pub async fn submit_and_await(
        &self,
        request: &InvocationRequest,
    ) -> RunResult<WorkflowInvocation> {
        let invocation = self.remote.create_workflow_invocation(request).await?;
        info!(
            "created invocation {} for {}",
            invocation.name, request.compilation
        );
        if invocation.state.is_terminal() {
            return Ok(invocation);
        }
        self.await_terminal(&invocation.name).await
    }

    /// Poll `name` until it reaches a terminal state.
    ///
    /// Returns immediately if the first fetch already reports one.
    pub async fn await_terminal(&self, name: &str) -> RunResult<WorkflowInvocation> {
        let started = Instant::now();
        let mut invocation = self.remote.get_workflow_invocation(name).await?;

        loop {
            if invocation.state.is_terminal() {
                info!("invocation {} finished: {}", name, invocation.state);
                return Ok(invocation);
            }
            if started.elapsed() >= self.timeout {
                return Err(RunError::Timeout {
                    invocation: name.to_string(),
                    last_state: invocation.state,
                    waited: started.elapsed(),
                });
            }
            debug!(
                "invocation {} still {}; polling again in {:?}",
                name, invocation.state, self.poll_interval
            );
            tokio::time::sleep(self.poll_interval).await;
            invocation = self.remote.get_workflow_invocation(name).await?;
        }
    }
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
