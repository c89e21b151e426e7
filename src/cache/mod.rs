//! On-disk cache for Jira's global metadata catalogs
//!
//! Issue types, statuses, priorities and resolutions rarely change, so they
//! are kept as JSON files per account and refreshed once their TTL expires.

pub mod codec;
mod entry;
mod kind;
mod metadata;
mod policy;
pub mod records;
mod store;

pub use codec::CacheRecord;
pub use entry::CacheEntry;
pub use kind::ResourceKind;
pub use metadata::{CacheResult, CacheSource, CachedMetadataClient};
pub use policy::CachePolicy;
pub use records::CachedKind;
pub use store::{CacheEntryStatus, CacheStore};
