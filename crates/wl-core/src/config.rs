//! Configuration types and parsing for warpline.yml

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// Default config file name searched in the project directory
pub const CONFIG_FILE: &str = "warpline.yml";

/// Default base URL for per-asset documentation links
pub const DEFAULT_DOCS_BASE_URL: &str = "https://app.warpline.dev/assets";

/// Main project configuration from warpline.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the remote transformation service API
    pub api_url: String,

    /// Cloud project containing the repository
    pub project: String,

    /// Region of the repository
    pub location: String,

    /// Repository identifier
    pub repository: String,

    /// Environment (git reference) whose compilations this deployment tracks
    pub environment: String,

    /// Base URL for per-asset documentation links
    #[serde(default = "default_docs_base_url")]
    pub docs_base_url: String,

    /// Freshness lag applied to every asset, in minutes
    #[serde(default = "default_freshness_lag_minutes")]
    pub freshness_lag_minutes: u64,

    /// Environment variable holding the API bearer token
    #[serde(default = "default_api_token_env")]
    pub api_token_env: String,
}

fn default_docs_base_url() -> String {
    DEFAULT_DOCS_BASE_URL.to_string()
}

fn default_freshness_lag_minutes() -> u64 {
    1440
}

fn default_api_token_env() -> String {
    "WARPLINE_API_TOKEN".to_string()
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `warpline.yml` in a project directory.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    /// The repository resource handle that parents compilations and
    /// invocations.
    pub fn parent(&self) -> String {
        format!(
            "projects/{}/locations/{}/repositories/{}",
            self.project, self.location, self.repository
        )
    }

    fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("api_url", &self.api_url),
            ("project", &self.project),
            ("location", &self.location),
            ("repository", &self.repository),
            ("environment", &self.environment),
            ("docs_base_url", &self.docs_base_url),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("'{}' must not be empty", field),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
