//! Runtime context for CLI commands

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wl_catalog::{ActionFetcher, CompilationResolver, GraphBuilder};
use wl_core::Config;
use wl_remote::{HttpService, RemoteService};

use crate::cli::GlobalArgs;

/// Runtime context containing loaded config and the remote client
pub struct RuntimeContext {
    /// Project configuration
    pub config: Config,

    /// Remote service client
    pub remote: Arc<dyn RemoteService>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = if let Some(config_path) = &args.config {
            Config::load(Path::new(config_path)).context("Failed to load configuration file")?
        } else {
            Config::load_from_dir(Path::new(&args.project_dir))
                .context("Failed to load project configuration")?
        };

        let token = std::env::var(&config.api_token_env).ok();
        let remote: Arc<dyn RemoteService> = Arc::new(
            HttpService::new(&config.api_url, config.parent(), token)
                .context("Failed to create remote client")?,
        );

        Ok(Self {
            config,
            remote,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }

    /// Resolver for the configured environment
    pub fn resolver(&self) -> CompilationResolver {
        CompilationResolver::new(self.remote.clone(), &self.config.environment)
    }

    /// Fetcher bound to the remote client
    pub fn fetcher(&self) -> ActionFetcher {
        ActionFetcher::new(self.remote.clone())
    }

    /// Builder configured from warpline.yml
    pub fn builder(&self) -> GraphBuilder {
        GraphBuilder::new()
            .with_freshness_lag(Duration::from_secs(self.config.freshness_lag_minutes * 60))
            .with_docs_base_url(&self.config.docs_base_url)
    }
}
