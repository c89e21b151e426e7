//! Per-account cache directory layout

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::codec::CacheRecord;
use super::entry::CacheEntry;
use super::{CachePolicy, ResourceKind};
use crate::error::CacheError;

/// Cache files for one account, under `<root>/<account>/`
#[derive(Debug, Clone)]
pub struct CacheStore {
    account_dir: PathBuf,
}

impl CacheStore {
    /// Scope a cache root to an account.
    ///
    /// The account name becomes a single directory component, so names that
    /// could escape the root or collide with it are rejected.
    pub fn new(root: impl AsRef<Path>, account: &str) -> Result<Self, CacheError> {
        let usable = !account.is_empty()
            && account != "."
            && account != ".."
            && !account.contains(['/', '\\'])
            && !account.contains('\0');
        if !usable {
            return Err(CacheError::InvalidAccount(account.to_string()));
        }

        Ok(Self {
            account_dir: root.as_ref().join(account),
        })
    }

    pub fn account_dir(&self) -> &Path {
        &self.account_dir
    }

    /// Path of the cache file for a kind, creating the account directory if needed
    pub fn path_for(&self, kind: ResourceKind) -> Result<PathBuf, CacheError> {
        let path = self.account_dir.join(kind.file_name());
        fs::create_dir_all(&self.account_dir).map_err(|e| CacheError::write(&path, e))?;
        Ok(path)
    }

    /// Cache slot holding the collection for a kind
    pub fn entry<R: CacheRecord>(
        &self,
        kind: ResourceKind,
    ) -> Result<CacheEntry<Vec<R>>, CacheError> {
        Ok(CacheEntry::new(self.path_for(kind)?))
    }

    /// Inspect every cache file without creating anything
    pub fn status(&self, policy: &CachePolicy) -> Vec<CacheEntryStatus> {
        ResourceKind::ALL
            .iter()
            .map(|&kind| {
                let entry: CacheEntry<serde_json::Value> =
                    CacheEntry::new(self.account_dir.join(kind.file_name()));
                let age = entry.age();
                let ttl = policy.ttl(kind);
                let count = age
                    .and_then(|_| entry.read().ok())
                    .and_then(|value| value.as_array().map(|items| items.len()));

                CacheEntryStatus {
                    kind,
                    path: entry.path().to_path_buf(),
                    exists: age.is_some(),
                    age_secs: age.map(|a| a.as_secs()),
                    count,
                    ttl,
                    fresh: entry.is_fresh(ttl),
                }
            })
            .collect()
    }

    /// Remove this account's cache directory
    pub fn clear(&self) -> std::io::Result<()> {
        if self.account_dir.exists() {
            fs::remove_dir_all(&self.account_dir)?;
        }
        Ok(())
    }
}

/// Status of a single cache file
#[derive(Debug, Clone)]
pub struct CacheEntryStatus {
    pub kind: ResourceKind,
    pub path: PathBuf,
    pub exists: bool,
    pub age_secs: Option<u64>,
    pub count: Option<usize>,
    pub ttl: Duration,
    pub fresh: bool,
}
