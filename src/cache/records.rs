//! Serialization-stable mirrors of the metadata domain types.
//!
//! These are what actually lands in the cache files. Field names and order
//! follow the on-disk schema, and every field is optional on read.

use serde::{Deserialize, Serialize};
use url::Url;

use super::codec::CacheRecord;
use super::ResourceKind;
use crate::error::Result;
use crate::jira::{
    IssueType, MetadataClient, Priority, Resolution, SelfLinked, Status, StatusCategory,
};

/// Ties a cache record type to its domain type, resource kind and remote calls
pub trait CachedKind: CacheRecord {
    type Item: SelfLinked + Clone;

    const KIND: ResourceKind;

    fn from_item(item: &Self::Item) -> Self;
    fn into_item(self) -> Self::Item;

    fn fetch_all(remote: &dyn MetadataClient) -> Result<Vec<Self::Item>>;
    fn fetch_one(remote: &dyn MetadataClient, uri: &Url) -> Result<Self::Item>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CachedIssueType {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub is_subtask: bool,
    pub description: Option<String>,
    pub icon_uri: Option<Url>,
}

impl CacheRecord for CachedIssueType {}

impl CachedKind for CachedIssueType {
    type Item = IssueType;

    const KIND: ResourceKind = ResourceKind::IssueTypes;

    fn from_item(item: &IssueType) -> Self {
        Self {
            self_uri: item.self_uri.clone(),
            id: item.id,
            name: item.name.clone(),
            is_subtask: item.is_subtask,
            description: item.description.clone(),
            icon_uri: item.icon_uri.clone(),
        }
    }

    fn into_item(self) -> IssueType {
        IssueType {
            self_uri: self.self_uri,
            id: self.id,
            name: self.name,
            is_subtask: self.is_subtask,
            description: self.description,
            icon_uri: self.icon_uri,
        }
    }

    fn fetch_all(remote: &dyn MetadataClient) -> Result<Vec<IssueType>> {
        remote.issue_types()
    }

    fn fetch_one(remote: &dyn MetadataClient, uri: &Url) -> Result<IssueType> {
        remote.issue_type(uri)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CachedStatusCategory {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub key: String,
    pub name: String,
    pub color_name: Option<String>,
}

impl From<&StatusCategory> for CachedStatusCategory {
    fn from(category: &StatusCategory) -> Self {
        Self {
            self_uri: category.self_uri.clone(),
            id: category.id,
            key: category.key.clone(),
            name: category.name.clone(),
            color_name: category.color_name.clone(),
        }
    }
}

impl From<CachedStatusCategory> for StatusCategory {
    fn from(cached: CachedStatusCategory) -> Self {
        Self {
            self_uri: cached.self_uri,
            id: cached.id,
            key: cached.key,
            name: cached.name,
            color_name: cached.color_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CachedStatus {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
    pub status_category: Option<CachedStatusCategory>,
}

impl CacheRecord for CachedStatus {}

impl CachedKind for CachedStatus {
    type Item = Status;

    const KIND: ResourceKind = ResourceKind::Statuses;

    fn from_item(item: &Status) -> Self {
        Self {
            self_uri: item.self_uri.clone(),
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            icon_url: item.icon_url.clone(),
            status_category: item.status_category.as_ref().map(Into::into),
        }
    }

    fn into_item(self) -> Status {
        Status {
            self_uri: self.self_uri,
            id: self.id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
            status_category: self.status_category.map(Into::into),
        }
    }

    fn fetch_all(remote: &dyn MetadataClient) -> Result<Vec<Status>> {
        remote.statuses()
    }

    fn fetch_one(remote: &dyn MetadataClient, uri: &Url) -> Result<Status> {
        remote.status(uri)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CachedPriority {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub status_color: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
}

impl CacheRecord for CachedPriority {}

impl CachedKind for CachedPriority {
    type Item = Priority;

    const KIND: ResourceKind = ResourceKind::Priorities;

    fn from_item(item: &Priority) -> Self {
        Self {
            self_uri: item.self_uri.clone(),
            id: item.id,
            name: item.name.clone(),
            status_color: item.status_color.clone(),
            description: item.description.clone(),
            icon_url: item.icon_url.clone(),
        }
    }

    fn into_item(self) -> Priority {
        Priority {
            self_uri: self.self_uri,
            id: self.id,
            name: self.name,
            status_color: self.status_color,
            description: self.description,
            icon_url: self.icon_url,
        }
    }

    fn fetch_all(remote: &dyn MetadataClient) -> Result<Vec<Priority>> {
        remote.priorities()
    }

    fn fetch_one(remote: &dyn MetadataClient, uri: &Url) -> Result<Priority> {
        remote.priority(uri)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CachedResolution {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CacheRecord for CachedResolution {}

impl CachedKind for CachedResolution {
    type Item = Resolution;

    const KIND: ResourceKind = ResourceKind::Resolutions;

    fn from_item(item: &Resolution) -> Self {
        Self {
            self_uri: item.self_uri.clone(),
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }

    fn into_item(self) -> Resolution {
        Resolution {
            self_uri: self.self_uri,
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }

    fn fetch_all(remote: &dyn MetadataClient) -> Result<Vec<Resolution>> {
        remote.resolutions()
    }

    fn fetch_one(remote: &dyn MetadataClient, uri: &Url) -> Result<Resolution> {
        remote.resolution(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::codec::{decode, encode};

    fn url(path: &str) -> Option<Url> {
        Some(Url::parse(&format!("https://jira.example.com{path}")).unwrap())
    }

    fn sample_status() -> CachedStatus {
        CachedStatus {
            self_uri: url("/rest/api/2/status/3"),
            id: 3,
            name: "In Progress".to_string(),
            description: Some("Actively being worked on".to_string()),
            icon_url: url("/images/icons/statuses/inprogress.png"),
            status_category: Some(CachedStatusCategory {
                self_uri: url("/rest/api/2/statuscategory/4"),
                id: 4,
                key: "indeterminate".to_string(),
                name: "In Progress".to_string(),
                color_name: Some("yellow".to_string()),
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Round-trip Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_issue_type_round_trip() {
        let record = CachedIssueType {
            self_uri: url("/rest/api/2/issuetype/5"),
            id: 5,
            name: "Sub-task".to_string(),
            is_subtask: true,
            description: Some("A piece of a larger task".to_string()),
            icon_uri: url("/images/icons/subtask.png"),
        };

        let decoded: CachedIssueType = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_status_round_trip() {
        let record = sample_status();
        let decoded: CachedStatus = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_priority_round_trip() {
        let record = CachedPriority {
            self_uri: url("/rest/api/2/priority/1"),
            id: 1,
            name: "Blocker".to_string(),
            status_color: Some("#cc0000".to_string()),
            description: None,
            icon_url: url("/images/icons/priorities/blocker.svg"),
        };

        let decoded: CachedPriority = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_resolution_round_trip() {
        let record = CachedResolution {
            self_uri: url("/rest/api/2/resolution/2"),
            id: 2,
            name: "Won't Fix".to_string(),
            description: Some("The problem described is an issue which will never be fixed.".to_string()),
        };

        let decoded: CachedResolution = decode(&encode(&record).unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_domain_conversion_is_lossless() {
        let record = sample_status();
        let status = record.clone().into_item();
        assert_eq!(CachedStatus::from_item(&status), record);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Schema Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_issue_type_field_names() {
        let json = serde_json::to_value(CachedIssueType::default()).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        for key in ["self", "id", "name", "isSubtask", "description", "iconUri"] {
            assert!(keys.iter().any(|k| k == key), "missing {key}");
        }
    }

    #[test]
    fn test_status_field_names() {
        let json = serde_json::to_value(sample_status()).unwrap();
        assert!(json.get("iconUrl").is_some());
        assert_eq!(json["statusCategory"]["colorName"], "yellow");
        assert_eq!(json["statusCategory"]["key"], "indeterminate");
    }

    #[test]
    fn test_priority_field_names() {
        let json = serde_json::to_value(CachedPriority::default()).unwrap();
        assert!(json.get("statusColor").is_some());
        assert!(json.get("iconUrl").is_some());
        assert!(json.get("self").is_some());
    }

    #[test]
    fn test_minimal_priority_decodes() {
        let decoded: Vec<CachedPriority> = decode(r#"[{"id":1,"name":"High"}]"#).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 1);
        assert_eq!(decoded[0].name, "High");
        assert!(decoded[0].self_uri.is_none());
        assert!(decoded[0].status_color.is_none());
    }
}
