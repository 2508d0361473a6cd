//! Cached asset catalog with eager and lazy loading.

use log::info;

use wl_core::{AssetSpec, CheckSpec};

use crate::builder::GraphBuilder;
use crate::error::CatalogResult;
use crate::fetcher::ActionFetcher;
use crate::resolver::CompilationResolver;

/// Explicit memoization cell. `Loading` marks the in-flight transition so
/// the single-load guarantee is visible in the type rather than implied by
/// null checks.
#[derive(Debug)]
enum LoadState<T> {
    NotLoaded,
    Loading,
    Loaded(T),
}

impl<T> LoadState<T> {
    fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// The asset/check catalog exposed to the orchestration host.
///
/// Two load modes, chosen at construction:
///
/// - **Eager** ([`AssetCatalog::eager`]): compiles the environment fresh and
///   builds the catalog immediately. Reflects current source state, pays a
///   fresh compile per instantiation.
/// - **Lazy** ([`AssetCatalog::lazy`]): defers all remote work until first
///   read, then resolves the latest *existing* snapshot (fatal if none).
///
/// Once loaded, an instance never re-queries: staleness is a property of the
/// instance's lifetime, and freshness is obtained by constructing a new one.
/// Reads take `&mut self`; a multi-threaded host must serialize access.
pub struct AssetCatalog {
    resolver: CompilationResolver,
    fetcher: ActionFetcher,
    builder: GraphBuilder,
    assets: LoadState<Vec<AssetSpec>>,
    checks: LoadState<Vec<CheckSpec>>,
}

impl AssetCatalog {
    /// Compile the environment now and build both artifacts from the fresh
    /// snapshot.
    pub async fn eager(
        resolver: CompilationResolver,
        fetcher: ActionFetcher,
        builder: GraphBuilder,
    ) -> CatalogResult<Self> {
        let summary = resolver.create().await?;
        let actions = fetcher.fetch(&summary.name).await?;
        let report = builder.build(&actions, None);
        info!(
            "eager catalog ready for '{}': {} assets, {} checks",
            resolver.environment(),
            report.assets.len(),
            report.checks.len()
        );
        Ok(Self {
            resolver,
            fetcher,
            builder,
            assets: LoadState::Loaded(report.assets),
            checks: LoadState::Loaded(report.checks),
        })
    }

    /// Defer all remote work until the catalog is first read.
    pub fn lazy(
        resolver: CompilationResolver,
        fetcher: ActionFetcher,
        builder: GraphBuilder,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            builder,
            assets: LoadState::NotLoaded,
            checks: LoadState::NotLoaded,
        }
    }

    /// Asset records, loading and memoizing on first read.
    pub async fn assets(&mut self) -> CatalogResult<&[AssetSpec]> {
        if self.assets.loaded().is_none() {
            self.assets = LoadState::Loading;
            match self.load_lazy().await {
                Ok((assets, _)) => self.assets = LoadState::Loaded(assets),
                Err(e) => {
                    self.assets = LoadState::NotLoaded;
                    return Err(e);
                }
            }
        }
        match self.assets.loaded() {
            Some(assets) => Ok(assets),
            None => unreachable!("assets are loaded after a successful load"),
        }
    }

    /// Check records, loading and memoizing on first read. Memoized
    /// independently of assets: reading one never force-loads the other.
    pub async fn checks(&mut self) -> CatalogResult<&[CheckSpec]> {
        if self.checks.loaded().is_none() {
            self.checks = LoadState::Loading;
            match self.load_lazy().await {
                Ok((_, checks)) => self.checks = LoadState::Loaded(checks),
                Err(e) => {
                    self.checks = LoadState::NotLoaded;
                    return Err(e);
                }
            }
        }
        match self.checks.loaded() {
            Some(checks) => Ok(checks),
            None => unreachable!("checks are loaded after a successful load"),
        }
    }

    /// One lazy resolve+fetch+build cycle. Requires a pre-existing snapshot;
    /// its handle is threaded into asset metadata for staleness detection.
    async fn load_lazy(&self) -> CatalogResult<(Vec<AssetSpec>, Vec<CheckSpec>)> {
        let summary = self.resolver.require_latest().await?;
        let actions = self.fetcher.fetch(&summary.name).await?;
        let report = self.builder.build(&actions, Some(&summary.name));
        Ok((report.assets, report.checks))
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
