//! Expiry windows for cached metadata

use std::collections::BTreeMap;
use std::time::Duration;

use super::ResourceKind;

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

/// Per-kind time-to-live for cache files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    ttls: BTreeMap<ResourceKind, Duration>,
}

impl CachePolicy {
    /// Built-in expiry window for a kind.
    ///
    /// Issue types, priorities and resolutions are edited by admins a few
    /// times a year; statuses churn with workflow changes, so they expire daily.
    pub fn default_ttl(kind: ResourceKind) -> Duration {
        match kind {
            ResourceKind::Statuses => Duration::from_secs(DAY),
            ResourceKind::IssueTypes | ResourceKind::Priorities | ResourceKind::Resolutions => {
                Duration::from_secs(30 * DAY)
            }
        }
    }

    pub fn ttl(&self, kind: ResourceKind) -> Duration {
        self.ttls
            .get(&kind)
            .copied()
            .unwrap_or_else(|| Self::default_ttl(kind))
    }

    pub fn set_ttl(&mut self, kind: ResourceKind, ttl: Duration) {
        self.ttls.insert(kind, ttl);
    }

    /// Builder-style variant of [`CachePolicy::set_ttl`]
    pub fn with_ttl(mut self, kind: ResourceKind, ttl: Duration) -> Self {
        self.set_ttl(kind, ttl);
        self
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            ttls: ResourceKind::ALL
                .iter()
                .map(|&k| (k, Self::default_ttl(k)))
                .collect(),
        }
    }
}
