//! Disk-backed decorator over a remote metadata client.
//!
//! Issue types, statuses, priorities and resolutions are served from the
//! account's cache directory while the file is younger than the kind's TTL.
//! Everything else goes straight to the wrapped client.

use tracing::{debug, warn};
use url::Url;

use super::records::{CachedIssueType, CachedKind, CachedPriority, CachedResolution, CachedStatus};
use super::{CachePolicy, CacheStore};
use crate::error::{CacheError, Result};
use crate::jira::{
    ForwardMetadata, IssueType, MetadataClient, Priority, Resolution, SelfLinked, Status,
};

/// Where a cached lookup got its data from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    Cache,
    Remote,
}

/// Outcome of a cached collection lookup
#[derive(Debug)]
pub struct CacheResult<T> {
    pub data: T,
    pub source: CacheSource,
    /// Set when the data came from the server but could not be persisted
    pub write_error: Option<CacheError>,
}

/// Metadata client that caches the four global catalogs on disk
pub struct CachedMetadataClient<'a> {
    remote: &'a dyn MetadataClient,
    store: CacheStore,
    policy: CachePolicy,
}

impl<'a> CachedMetadataClient<'a> {
    pub fn new(remote: &'a dyn MetadataClient, store: CacheStore, policy: CachePolicy) -> Self {
        Self {
            remote,
            store,
            policy,
        }
    }

    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Full collection of kind `K`, from disk if fresh, otherwise from the server.
    ///
    /// A fresh file that cannot be decoded is an error. Remote failures
    /// propagate unchanged and never fall back to a stale file. A failure to
    /// persist fetched data is reported in [`CacheResult::write_error`].
    pub fn lookup<K: CachedKind>(&self) -> Result<CacheResult<Vec<K::Item>>> {
        let kind = K::KIND;
        let ttl = self.policy.ttl(kind);
        let entry = self.store.entry::<K>(kind);

        if let Ok(entry) = &entry {
            if entry.is_fresh(ttl) {
                debug!(%kind, path = %entry.path().display(), "metadata cache hit");
                let records = entry.read()?;
                return Ok(CacheResult {
                    data: records.into_iter().map(K::into_item).collect(),
                    source: CacheSource::Cache,
                    write_error: None,
                });
            }
        }

        debug!(%kind, "metadata cache miss, fetching from server");
        let items = K::fetch_all(self.remote)?;

        let write_error = entry
            .and_then(|entry| entry.write(items.iter().map(K::from_item).collect()))
            .err();
        if let Some(err) = &write_error {
            warn!(%kind, "Could not update metadata cache: {err}");
        }

        Ok(CacheResult {
            data: items,
            source: CacheSource::Remote,
            write_error,
        })
    }

    /// Single item of kind `K` by its `self` URI.
    ///
    /// Answered from a fresh cache file when it holds a matching record,
    /// otherwise by the server's single-item lookup.
    pub fn lookup_one<K: CachedKind>(&self, uri: &Url) -> Result<K::Item> {
        let kind = K::KIND;
        let ttl = self.policy.ttl(kind);

        if let Ok(entry) = self.store.entry::<K>(kind) {
            if entry.is_fresh(ttl) {
                let found = entry
                    .read()?
                    .into_iter()
                    .map(K::into_item)
                    .find(|item| item.self_uri() == Some(uri));
                if let Some(item) = found {
                    debug!(%kind, %uri, "metadata cache hit");
                    return Ok(item);
                }
            }
        }

        debug!(%kind, %uri, "single item not cached, fetching from server");
        K::fetch_one(self.remote, uri)
    }
}

impl ForwardMetadata for CachedMetadataClient<'_> {
    fn remote(&self) -> &dyn MetadataClient {
        self.remote
    }

    fn issue_types(&self) -> Result<Vec<IssueType>> {
        self.lookup::<CachedIssueType>().map(|r| r.data)
    }

    fn issue_type(&self, uri: &Url) -> Result<IssueType> {
        self.lookup_one::<CachedIssueType>(uri)
    }

    fn statuses(&self) -> Result<Vec<Status>> {
        self.lookup::<CachedStatus>().map(|r| r.data)
    }

    fn status(&self, uri: &Url) -> Result<Status> {
        self.lookup_one::<CachedStatus>(uri)
    }

    fn priorities(&self) -> Result<Vec<Priority>> {
        self.lookup::<CachedPriority>().map(|r| r.data)
    }

    fn priority(&self, uri: &Url) -> Result<Priority> {
        self.lookup_one::<CachedPriority>(uri)
    }

    fn resolutions(&self) -> Result<Vec<Resolution>> {
        self.lookup::<CachedResolution>().map(|r| r.data)
    }

    fn resolution(&self, uri: &Url) -> Result<Resolution> {
        self.lookup_one::<CachedResolution>(uri)
    }
}
