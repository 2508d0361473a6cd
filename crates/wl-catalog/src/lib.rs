//! wl-catalog - Compilation resolution and asset-graph construction
//!
//! This crate turns a remote compilation into the asset/check records the
//! orchestration host consumes: resolving the correct snapshot for an
//! environment, fetching its flat action list, folding that list into typed
//! asset and check specs, and caching the result for the lifetime of a
//! catalog instance.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod resolver;

pub use builder::{BuildReport, GraphBuilder, SkippedAction};
pub use catalog::AssetCatalog;
pub use error::{CatalogError, CatalogResult};
pub use fetcher::ActionFetcher;
pub use resolver::{CompilationResolver, ScopeFilter};
