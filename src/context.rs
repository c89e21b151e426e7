//! Everything a command needs to talk to one account's Jira server

use std::path::{Path, PathBuf};

use crate::cache::{CachePolicy, CacheStore, CachedMetadataClient};
use crate::config::{Account, Config, Paths};
use crate::error::Result;
use crate::jira::{JiraClient, MetadataClient};

/// The account in use for this invocation: its name, remote client and
/// cache settings
pub struct AccountContext {
    name: String,
    remote: Box<dyn MetadataClient>,
    cache_root: PathBuf,
    policy: CachePolicy,
}

impl AccountContext {
    pub fn new(
        name: impl Into<String>,
        remote: Box<dyn MetadataClient>,
        cache_root: impl Into<PathBuf>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            name: name.into(),
            remote,
            cache_root: cache_root.into(),
            policy,
        }
    }

    /// Build a context for a saved account using the loaded configuration
    pub fn from_account(account: &Account, config: &Config, paths: &Paths) -> Result<Self> {
        let remote = JiraClient::new(account)?;
        Ok(Self::new(
            account.name.clone(),
            Box::new(remote),
            config.cache_root(paths),
            config.cache_policy()?,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache_root
    }

    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// The uncached server client
    pub fn remote(&self) -> &dyn MetadataClient {
        self.remote.as_ref()
    }

    /// This account's cache directory
    pub fn cache_store(&self) -> Result<CacheStore> {
        Ok(CacheStore::new(&self.cache_root, &self.name)?)
    }

    /// Metadata client that serves the global catalogs from the cache
    pub fn metadata_client(&self) -> Result<CachedMetadataClient<'_>> {
        Ok(CachedMetadataClient::new(
            self.remote(),
            self.cache_store()?,
            self.policy.clone(),
        ))
    }
}
