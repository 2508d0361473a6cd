//! Folding a flat action list into asset and check records.

use log::{info, warn};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use wl_core::config::DEFAULT_DOCS_BASE_URL;
use wl_core::{AssertionAction, AssetSpec, CheckSpec, CompilationAction, RelationAction};

/// Default freshness lag: one day, in minutes.
const DEFAULT_FRESHNESS_LAG_MINUTES: u64 = 1440;

/// An action the builder dropped, with the reason kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAction {
    /// Identity of the offending action, as rendered for logs
    pub target: String,
    /// Why the action was dropped
    pub reason: String,
}

/// Result of one build pass: everything that could be constructed, plus the
/// items that couldn't and why.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub assets: Vec<AssetSpec>,
    pub checks: Vec<CheckSpec>,
    pub skipped: Vec<SkippedAction>,
}

impl BuildReport {
    /// How many actions the pass attempted.
    pub fn attempted(&self) -> usize {
        self.assets.len() + self.checks.len() + self.skipped.len()
    }
}

/// Transforms compiled actions into host-facing asset and check records.
///
/// Construction failures are per-item: the offending action is logged,
/// recorded in the report, and the batch continues. A project with 500
/// well-formed tables and one malformed row still produces 500 assets.
pub struct GraphBuilder {
    docs_base_url: String,
    freshness_lag: Duration,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            freshness_lag: Duration::from_secs(DEFAULT_FRESHNESS_LAG_MINUTES * 60),
        }
    }

    /// Base URL for per-asset documentation links.
    pub fn with_docs_base_url(mut self, url: impl Into<String>) -> Self {
        self.docs_base_url = url.into();
        self
    }

    /// Freshness lag applied to every asset.
    pub fn with_freshness_lag(mut self, lag: Duration) -> Self {
        self.freshness_lag = lag;
        self
    }

    /// Fold `actions` into asset and check records.
    ///
    /// `compilation_ref` is recorded in each asset's metadata when supplied
    /// (the lazy-load path does this so callers can detect staleness); the
    /// eager path passes `None`. Declared edges only: ordering and cycle
    /// detection belong to the host's graph layer.
    pub fn build(
        &self,
        actions: &[CompilationAction],
        compilation_ref: Option<&str>,
    ) -> BuildReport {
        let mut report = BuildReport::default();

        for action in actions {
            let outcome = match action {
                CompilationAction::Relation(relation) => self
                    .asset_spec(relation, compilation_ref)
                    .map(|spec| report.assets.push(spec)),
                CompilationAction::Assertion(assertion) => {
                    check_spec(assertion).map(|spec| report.checks.push(spec))
                }
            };
            if let Err(reason) = outcome {
                let target = action.target().to_string();
                warn!("skipping action '{}': {}", target, reason);
                report.skipped.push(SkippedAction { target, reason });
            }
        }

        info!(
            "built {} assets and {} checks from {} actions ({} skipped)",
            report.assets.len(),
            report.checks.len(),
            actions.len(),
            report.skipped.len()
        );
        report
    }

    fn asset_spec(
        &self,
        relation: &RelationAction,
        compilation_ref: Option<&str>,
    ) -> Result<AssetSpec, String> {
        if relation.target.name.is_empty() {
            return Err("relation target has no name".to_string());
        }
        let schema = relation
            .target
            .schema
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "relation target has no schema".to_string())?;

        let mut metadata = BTreeMap::new();
        metadata.insert(
            "database".to_string(),
            relation.target.database.clone().unwrap_or_default(),
        );
        metadata.insert("schema".to_string(), schema.to_string());
        metadata.insert("asset_name".to_string(), relation.target.name.clone());
        metadata.insert(
            "docs_link".to_string(),
            format!("{}#{}", self.docs_base_url, relation.target.name),
        );
        metadata.insert("sql".to_string(), relation.select_query.clone());
        if let Some(compilation) = compilation_ref {
            metadata.insert("compilation".to_string(), compilation.to_string());
        }

        // Cross-schema dependencies collapse to bare names, mirroring the
        // remote service's own identity for intra-project references.
        let deps: BTreeSet<String> = relation
            .dependency_targets
            .iter()
            .map(|t| t.name.clone())
            .collect();

        Ok(AssetSpec {
            key: relation.target.name.clone(),
            deps,
            group: schema.to_string(),
            tags: relation
                .tags
                .iter()
                .map(|tag| (tag.clone(), String::new()))
                .collect(),
            metadata,
            freshness_lag: self.freshness_lag,
        })
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a check record from an assertion.
///
/// A check whose parent never appears among the batch's relations is still
/// emitted; parent binding is validated by the host's own key model.
fn check_spec(assertion: &AssertionAction) -> Result<CheckSpec, String> {
    if assertion.target.name.is_empty() {
        return Err("assertion target has no name".to_string());
    }
    if assertion.parent.name.is_empty() {
        return Err("assertion has no parent target".to_string());
    }
    Ok(CheckSpec {
        asset: assertion.parent.name.clone(),
        name: assertion.target.name.clone(),
    })
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
