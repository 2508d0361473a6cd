//! Summary and invocation types exchanged with the remote service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use wl_core::{InvocationSelection, InvocationState, Target};

/// Scoping applied when the service compiles a project.
///
/// Every field defaults to unset; the service substitutes repository
/// defaults. A non-empty `table_prefix` marks an ad-hoc/ephemeral
/// compilation and is never produced for a canonical environment snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompilationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,

    /// Schema that assertion views are written to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_prefix: Option<String>,

    /// Compilation variables forwarded to the project
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, String>,
}

impl CompilationConfig {
    /// Whether the compilation was produced with a table prefix (ad-hoc).
    pub fn is_prefixed(&self) -> bool {
        self.table_prefix.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// One compilation snapshot as listed by the service. Immutable once
/// created; multiple snapshots may exist per environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationSummary {
    /// Opaque resource handle
    /// (`projects/{p}/locations/{l}/repositories/{r}/compilationResults/{id}`)
    pub name: String,

    /// Git reference the snapshot was compiled from
    pub git_ref: String,

    /// Scoping the snapshot was compiled with
    #[serde(default)]
    pub config: CompilationConfig,

    /// When the service created the snapshot
    pub create_time: DateTime<Utc>,
}

/// A workflow invocation executing (a subset of) a compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInvocation {
    /// Opaque resource handle
    pub name: String,

    /// Handle of the compilation being executed
    pub compilation: String,

    /// Selection the invocation was created with; `None` runs everything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<InvocationSelection>,

    /// Current lifecycle state
    pub state: InvocationState,

    /// Per-action execution states
    #[serde(default)]
    pub actions: Vec<InvocationAction>,

    /// When the invocation started
    pub start_time: DateTime<Utc>,
}

/// Execution state of a single action within an invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationAction {
    /// Identity of the executed object
    pub target: Target,

    /// Lifecycle state of this action
    pub state: InvocationState,
}
