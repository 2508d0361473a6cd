//! Compiled actions returned by the remote transformation service.
//!
//! A compilation flattens a project into a list of actions. Each action is
//! either a *relation* (a materializable object with a query) or an
//! *assertion* (a data check bound to exactly one parent relation). Modelling
//! this as a tagged enum rules out the ambiguous states a shared struct with
//! optional fields would allow (an action that is neither, or both).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::target::Target;

/// One unit of compiled output from the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompilationAction {
    /// A materializable relation (table/view) with its rendered query
    Relation(RelationAction),
    /// A data-quality assertion bound to a parent relation
    Assertion(AssertionAction),
}

/// A materializable relation produced by the compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationAction {
    /// Identity of the relation
    pub target: Target,

    /// Rendered SQL for the relation
    pub select_query: String,

    /// Tags declared on the relation (presence-only semantics)
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Targets this relation reads from
    #[serde(default)]
    pub dependency_targets: Vec<Target>,
}

/// An assertion (data check) produced by the compilation.
///
/// Every assertion references exactly one parent relation; the host graph
/// attaches the check to that relation's asset. Assertions whose parent does
/// not appear among the batch's relations are a per-item concern for the
/// host's own key model, not a batch failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertionAction {
    /// Identity of the assertion itself
    pub target: Target,

    /// The relation this assertion checks
    pub parent: Target,

    /// Targets the assertion reads from
    #[serde(default)]
    pub dependency_targets: Vec<Target>,
}

impl CompilationAction {
    /// Identity of the compiled object, regardless of variant.
    pub fn target(&self) -> &Target {
        match self {
            CompilationAction::Relation(r) => &r.target,
            CompilationAction::Assertion(a) => &a.target,
        }
    }

    /// Whether this action is an assertion.
    pub fn is_assertion(&self) -> bool {
        matches!(self, CompilationAction::Assertion(_))
    }
}

#[cfg(test)]
#[path = "action_test.rs"]
mod tests;
