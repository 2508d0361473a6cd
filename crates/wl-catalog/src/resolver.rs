//! Resolving the correct compilation snapshot for an environment.

use log::{debug, info};
use std::sync::Arc;

use wl_remote::{CompilationConfig, CompilationSummary, RemoteResult, RemoteService};

use crate::error::{CatalogError, CatalogResult};

/// How many snapshots one listing page may carry
const LIST_PAGE_SIZE: u32 = 1000;

/// Scoping filter applied when selecting among an environment's snapshots.
///
/// A field left unset matches anything; a set field must equal the
/// snapshot's corresponding config field exactly, where the snapshot's own
/// unset field reads as the empty string. Snapshots carrying a non-empty
/// `table_prefix` are ad-hoc/ephemeral and rejected unless
/// `include_prefixed` is set.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub location: Option<String>,
    pub include_prefixed: bool,
}

impl ScopeFilter {
    /// Whether a snapshot's scoping satisfies this filter.
    pub fn matches(&self, config: &CompilationConfig) -> bool {
        if !self.include_prefixed && config.is_prefixed() {
            return false;
        }
        let field_matches = |want: &Option<String>, have: &Option<String>| match want {
            Some(want) => want == have.as_deref().unwrap_or(""),
            None => true,
        };
        field_matches(&self.database, &config.default_database)
            && field_matches(&self.schema, &config.default_schema)
            && field_matches(&self.location, &config.default_location)
    }
}

/// Finds (or creates) the compilation snapshot an environment should use.
pub struct CompilationResolver {
    remote: Arc<dyn RemoteService>,
    environment: String,
    config: CompilationConfig,
    filter: ScopeFilter,
}

impl CompilationResolver {
    pub fn new(remote: Arc<dyn RemoteService>, environment: impl Into<String>) -> Self {
        Self {
            remote,
            environment: environment.into(),
            config: CompilationConfig::default(),
            filter: ScopeFilter::default(),
        }
    }

    /// Scoping used when creating fresh compilations.
    pub fn with_config(mut self, config: CompilationConfig) -> Self {
        self.config = config;
        self
    }

    /// Filter applied when selecting among existing snapshots.
    pub fn with_filter(mut self, filter: ScopeFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The environment (git reference) this resolver tracks.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Find the most recent snapshot matching the environment and filter.
    ///
    /// The service lists snapshots newest first; the first match wins and no
    /// re-sort is performed. A missing snapshot is `Ok(None)`, not an error.
    pub async fn find_latest(&self) -> RemoteResult<Option<CompilationSummary>> {
        let summaries = self.remote.list_compilations(LIST_PAGE_SIZE).await?;
        debug!(
            "inspecting {} compilation snapshots for environment '{}'",
            summaries.len(),
            self.environment
        );

        let found = summaries
            .into_iter()
            .find(|s| s.git_ref == self.environment && self.filter.matches(&s.config));

        match &found {
            Some(summary) => info!(
                "resolved environment '{}' to compilation {}",
                self.environment, summary.name
            ),
            None => info!(
                "no compilation snapshot matched environment '{}'",
                self.environment
            ),
        }
        Ok(found)
    }

    /// Like [`find_latest`](Self::find_latest), but a missing snapshot is
    /// fatal. Used by the lazy-load path, which never compiles on its own.
    pub async fn require_latest(&self) -> CatalogResult<CompilationSummary> {
        self.find_latest()
            .await?
            .ok_or_else(|| CatalogError::MissingCompilation {
                environment: self.environment.clone(),
            })
    }

    /// Unconditionally request a fresh compilation of the environment.
    pub async fn create(&self) -> RemoteResult<CompilationSummary> {
        let summary = self
            .remote
            .create_compilation(&self.environment, &self.config)
            .await?;
        info!(
            "created compilation {} for environment '{}'",
            summary.name, self.environment
        );
        Ok(summary)
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
