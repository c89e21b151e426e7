use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::paths::Paths;
use crate::cache::{CachePolicy, ResourceKind};
use crate::error::Result;
use crate::ttl::parse_ttl;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Metadata cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Metadata cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache root directory (defaults to ~/.jamira/cache)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Expiry window per resource kind
    #[serde(default)]
    pub ttl: TtlConfig,
}

/// Per-kind TTL overrides, e.g. `statuses = "24h"`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TtlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priorities: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutions: Option<String>,
}

impl TtlConfig {
    /// Configured override for a kind, if any
    pub fn get(&self, kind: ResourceKind) -> Option<&str> {
        match kind {
            ResourceKind::IssueTypes => self.issue_types.as_deref(),
            ResourceKind::Statuses => self.statuses.as_deref(),
            ResourceKind::Priorities => self.priorities.as_deref(),
            ResourceKind::Resolutions => self.resolutions.as_deref(),
        }
    }
}

/// Output formatting preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "pretty".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific paths instance
    pub fn load_from(paths: &Paths) -> Result<Self> {
        if !paths.config_exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&paths.config_file)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Cache root directory, honoring the `[cache] dir` override
    pub fn cache_root(&self, paths: &Paths) -> PathBuf {
        self.cache
            .dir
            .clone()
            .unwrap_or_else(|| paths.cache_dir.clone())
    }

    /// Build the cache policy from defaults plus configured overrides
    pub fn cache_policy(&self) -> Result<CachePolicy> {
        let mut policy = CachePolicy::default();
        for kind in ResourceKind::ALL {
            if let Some(raw) = self.cache.ttl.get(kind) {
                policy.set_ttl(kind, parse_ttl(raw)?);
            }
        }
        Ok(policy)
    }
}
