//! Workflow invocation selection semantics and lifecycle states.

use serde::{Deserialize, Serialize};

use crate::target::Target;

/// Lifecycle state of a workflow invocation on the remote service.
///
/// `Succeeded`, `Failed`, and `Cancelled` are terminal. Terminal failure
/// states are reported as values, never raised as errors; retry policy is a
/// caller decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvocationState {
    /// Queued, not yet started
    Pending,
    /// Actions are executing
    Running,
    /// All actions completed successfully
    Succeeded,
    /// At least one action failed
    Failed,
    /// Cancelled by an explicit request
    Cancelled,
}

impl InvocationState {
    /// Whether the invocation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvocationState::Succeeded | InvocationState::Failed | InvocationState::Cancelled
        )
    }
}

impl std::fmt::Display for InvocationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationState::Pending => write!(f, "pending"),
            InvocationState::Running => write!(f, "running"),
            InvocationState::Succeeded => write!(f, "succeeded"),
            InvocationState::Failed => write!(f, "failed"),
            InvocationState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Selective-execution criteria for a workflow invocation.
///
/// Defaults follow the service's selective-run contract: upstream
/// dependencies are included (a selected transformation should not run
/// against stale inputs), downstream dependents are excluded (selective runs
/// should not cascade), and incremental semantics are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationSelection {
    /// Targets to run. Bare names match by name alone; qualified targets
    /// match exactly.
    #[serde(default)]
    pub included_targets: Vec<Target>,

    /// Tags to run (any object carrying one of these tags)
    #[serde(default)]
    pub included_tags: Vec<String>,

    /// Include transitive upstream dependencies of the selection
    #[serde(default = "default_true")]
    pub transitive_dependencies_included: bool,

    /// Include transitive downstream dependents of the selection
    #[serde(default)]
    pub transitive_dependents_included: bool,

    /// Force a full refresh of incremental tables
    #[serde(default)]
    pub fully_refresh_incremental_tables: bool,

    /// Service account to run the workflow as, overriding the repository
    /// default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for InvocationSelection {
    fn default() -> Self {
        Self {
            included_targets: Vec::new(),
            included_tags: Vec::new(),
            transitive_dependencies_included: true,
            transitive_dependents_included: false,
            fully_refresh_incremental_tables: false,
            run_as: None,
        }
    }
}

impl InvocationSelection {
    /// Whether no selection criterion was supplied.
    ///
    /// The transitive/refresh flags alone never constitute a selection:
    /// "run everything" is the absence of a selection object, not an empty
    /// one.
    pub fn is_empty(&self) -> bool {
        self.included_targets.is_empty() && self.included_tags.is_empty() && self.run_as.is_none()
    }
}

/// A fully planned invocation request, ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Handle of the compilation to execute
    pub compilation: String,

    /// Selection criteria; `None` runs the whole compilation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<InvocationSelection>,
}

#[cfg(test)]
#[path = "invocation_test.rs"]
mod tests;
