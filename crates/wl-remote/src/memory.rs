//! In-memory fake of the remote service.
//!
//! Backs the catalog and run test suites and doubles as an offline backend
//! for local experimentation. Compilations are returned in seeded order
//! (seed newest first, matching the service's `create_time desc` contract),
//! invocation states follow a caller-provided script, and every trait method
//! counts its calls so tests can assert on remote traffic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use wl_core::{CompilationAction, InvocationRequest, InvocationState};

use crate::error::{RemoteError, RemoteResult};
use crate::traits::RemoteService;
use crate::types::{CompilationConfig, CompilationSummary, InvocationAction, WorkflowInvocation};

/// Call counts per trait method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list_compilations: usize,
    pub create_compilation: usize,
    pub query_compilation_actions: usize,
    pub create_workflow_invocation: usize,
    pub get_workflow_invocation: usize,
    pub list_workflow_invocations: usize,
    pub query_workflow_invocation_actions: usize,
}

impl CallCounts {
    /// Total calls across all methods.
    pub fn total(&self) -> usize {
        self.list_compilations
            + self.create_compilation
            + self.query_compilation_actions
            + self.create_workflow_invocation
            + self.get_workflow_invocation
            + self.list_workflow_invocations
            + self.query_workflow_invocation_actions
    }
}

#[derive(Debug)]
struct InvocationRecord {
    invocation: WorkflowInvocation,
    states: Vec<InvocationState>,
    cursor: usize,
}

#[derive(Default)]
struct Inner {
    compilations: Vec<CompilationSummary>,
    actions: HashMap<String, Vec<CompilationAction>>,
    compiled_actions: Vec<CompilationAction>,
    invocations: HashMap<String, InvocationRecord>,
    invocation_script: Vec<InvocationState>,
    invocation_actions: Vec<InvocationAction>,
    counts: CallCounts,
    fail_next: Option<(u16, String)>,
    next_id: usize,
}

/// Mutex-guarded fake remote service.
#[derive(Default)]
pub struct InMemoryService {
    inner: Mutex<Inner>,
}

impl InMemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RemoteResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| RemoteError::Transport(format!("fake service mutex poisoned: {}", e)))
    }

    /// Seed a compilation snapshot, returning its handle. Seed newest first:
    /// listing preserves seeded order.
    pub fn seed_compilation(
        &self,
        git_ref: &str,
        config: CompilationConfig,
        actions: Vec<CompilationAction>,
    ) -> String {
        let mut inner = self.inner.lock().expect("fake service mutex poisoned");
        inner.next_id += 1;
        let name = format!("memory/compilationResults/{}", inner.next_id);
        inner.compilations.push(CompilationSummary {
            name: name.clone(),
            git_ref: git_ref.to_string(),
            config,
            create_time: Utc::now(),
        });
        inner.actions.insert(name.clone(), actions);
        name
    }

    /// Actions attached to every compilation produced by
    /// `create_compilation`.
    pub fn set_compiled_actions(&self, actions: Vec<CompilationAction>) {
        let mut inner = self.inner.lock().expect("fake service mutex poisoned");
        inner.compiled_actions = actions;
    }

    /// Script the state sequence of subsequently created invocations. The
    /// first entry is the state reported at creation; each poll advances one
    /// entry and the final entry repeats forever.
    pub fn script_invocation(&self, states: Vec<InvocationState>) {
        let mut inner = self.inner.lock().expect("fake service mutex poisoned");
        inner.invocation_script = states;
    }

    /// Per-action states attached to subsequently created invocations.
    pub fn set_invocation_actions(&self, actions: Vec<InvocationAction>) {
        let mut inner = self.inner.lock().expect("fake service mutex poisoned");
        inner.invocation_actions = actions;
    }

    /// Make the next call fail with an API error.
    pub fn fail_next(&self, status: u16, message: &str) {
        let mut inner = self.inner.lock().expect("fake service mutex poisoned");
        inner.fail_next = Some((status, message.to_string()));
    }

    /// Snapshot of remote traffic so far.
    pub fn calls(&self) -> CallCounts {
        self.inner
            .lock()
            .expect("fake service mutex poisoned")
            .counts
    }
}

impl Inner {
    fn check_failure(&mut self) -> RemoteResult<()> {
        if let Some((status, message)) = self.fail_next.take() {
            return Err(RemoteError::Api { status, message });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteService for InMemoryService {
    async fn list_compilations(&self, page_size: u32) -> RemoteResult<Vec<CompilationSummary>> {
        let mut inner = self.lock()?;
        inner.counts.list_compilations += 1;
        inner.check_failure()?;
        Ok(inner
            .compilations
            .iter()
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn create_compilation(
        &self,
        git_ref: &str,
        config: &CompilationConfig,
    ) -> RemoteResult<CompilationSummary> {
        let mut inner = self.lock()?;
        inner.counts.create_compilation += 1;
        inner.check_failure()?;
        inner.next_id += 1;
        let name = format!("memory/compilationResults/{}", inner.next_id);
        let summary = CompilationSummary {
            name: name.clone(),
            git_ref: git_ref.to_string(),
            config: config.clone(),
            create_time: Utc::now(),
        };
        // Newest first, like the service's ordered listing
        inner.compilations.insert(0, summary.clone());
        let actions = inner.compiled_actions.clone();
        inner.actions.insert(name, actions);
        Ok(summary)
    }

    async fn query_compilation_actions(
        &self,
        compilation: &str,
        page_size: u32,
    ) -> RemoteResult<Vec<CompilationAction>> {
        let mut inner = self.lock()?;
        inner.counts.query_compilation_actions += 1;
        inner.check_failure()?;
        match inner.actions.get(compilation) {
            Some(actions) => Ok(actions.iter().take(page_size as usize).cloned().collect()),
            None => Err(RemoteError::Api {
                status: 404,
                message: format!("no such compilation: {}", compilation),
            }),
        }
    }

    async fn create_workflow_invocation(
        &self,
        request: &InvocationRequest,
    ) -> RemoteResult<WorkflowInvocation> {
        let mut inner = self.lock()?;
        inner.counts.create_workflow_invocation += 1;
        inner.check_failure()?;
        inner.next_id += 1;
        let name = format!("memory/workflowInvocations/{}", inner.next_id);
        let states = if inner.invocation_script.is_empty() {
            vec![InvocationState::Succeeded]
        } else {
            inner.invocation_script.clone()
        };
        let invocation = WorkflowInvocation {
            name: name.clone(),
            compilation: request.compilation.clone(),
            selection: request.selection.clone(),
            state: states[0],
            actions: inner.invocation_actions.clone(),
            start_time: Utc::now(),
        };
        inner.invocations.insert(
            name,
            InvocationRecord {
                invocation: invocation.clone(),
                states,
                cursor: 1,
            },
        );
        Ok(invocation)
    }

    async fn get_workflow_invocation(&self, name: &str) -> RemoteResult<WorkflowInvocation> {
        let mut inner = self.lock()?;
        inner.counts.get_workflow_invocation += 1;
        inner.check_failure()?;
        let record = inner.invocations.get_mut(name).ok_or(RemoteError::Api {
            status: 404,
            message: format!("no such invocation: {}", name),
        })?;
        let idx = record.cursor.min(record.states.len() - 1);
        record.invocation.state = record.states[idx];
        record.cursor += 1;
        Ok(record.invocation.clone())
    }

    async fn list_workflow_invocations(
        &self,
        since: DateTime<Utc>,
    ) -> RemoteResult<Vec<WorkflowInvocation>> {
        let mut inner = self.lock()?;
        inner.counts.list_workflow_invocations += 1;
        inner.check_failure()?;
        let mut invocations: Vec<WorkflowInvocation> = inner
            .invocations
            .values()
            .map(|r| r.invocation.clone())
            .filter(|i| i.start_time >= since)
            .collect();
        invocations.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(invocations)
    }

    async fn query_workflow_invocation_actions(
        &self,
        name: &str,
    ) -> RemoteResult<Vec<InvocationAction>> {
        let mut inner = self.lock()?;
        inner.counts.query_workflow_invocation_actions += 1;
        inner.check_failure()?;
        match inner.invocations.get(name) {
            Some(record) => Ok(record.invocation.actions.clone()),
            None => Err(RemoteError::Api {
                status: 404,
                message: format!("no such invocation: {}", name),
            }),
        }
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
