//! Remote service trait definition

use crate::error::RemoteResult;
use crate::types::{CompilationConfig, CompilationSummary, InvocationAction, WorkflowInvocation};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use wl_core::{CompilationAction, InvocationRequest};

/// Boundary to the remote SQL-transformation service.
///
/// Implementations must be Send + Sync. This layer adds no retries; a
/// transport failure surfaces as [`RemoteError`](crate::RemoteError) and
/// retry policy stays with the caller.
#[async_trait]
pub trait RemoteService: Send + Sync {
    /// List compilation snapshots for the repository, newest first.
    ///
    /// Ordering is part of the service contract; callers perform no re-sort.
    async fn list_compilations(&self, page_size: u32) -> RemoteResult<Vec<CompilationSummary>>;

    /// Request a fresh compilation of `git_ref` with the given scoping.
    async fn create_compilation(
        &self,
        git_ref: &str,
        config: &CompilationConfig,
    ) -> RemoteResult<CompilationSummary>;

    /// Fetch the flat action list of a compilation (single page assumed).
    async fn query_compilation_actions(
        &self,
        compilation: &str,
        page_size: u32,
    ) -> RemoteResult<Vec<CompilationAction>>;

    /// Submit a workflow invocation.
    async fn create_workflow_invocation(
        &self,
        request: &InvocationRequest,
    ) -> RemoteResult<WorkflowInvocation>;

    /// Fetch the current state of an invocation (used for polling).
    async fn get_workflow_invocation(&self, name: &str) -> RemoteResult<WorkflowInvocation>;

    /// List invocations that started at or after `since`, newest first.
    async fn list_workflow_invocations(
        &self,
        since: DateTime<Utc>,
    ) -> RemoteResult<Vec<WorkflowInvocation>>;

    /// Fetch per-action execution states of an invocation.
    async fn query_workflow_invocation_actions(
        &self,
        name: &str,
    ) -> RemoteResult<Vec<InvocationAction>>;
}
