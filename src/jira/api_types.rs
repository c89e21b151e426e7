//! Wire shapes returned by the Jira REST API (v2).
//!
//! Jira sends most ids as strings (`"10001"`) but status category ids as
//! numbers, so ids go through [`deserialize_id`] before landing in the domain
//! types from [`super::types`].

use serde::{Deserialize, Deserializer};
use url::Url;

use super::types::{
    Field, IssueLinkType, IssueType, Priority, Resolution, ServerInfo, Status, StatusCategory,
};

/// Accept an id sent either as a JSON string or a JSON number
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {s:?}"))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIssueType {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
}

impl From<ApiIssueType> for IssueType {
    fn from(api: ApiIssueType) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            name: api.name,
            is_subtask: api.subtask,
            description: api.description,
            icon_uri: api.icon_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatusCategory {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub key: String,
    pub name: String,
    pub color_name: Option<String>,
}

impl From<ApiStatusCategory> for StatusCategory {
    fn from(api: ApiStatusCategory) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            key: api.key,
            name: api.name,
            color_name: api.color_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
    pub status_category: Option<ApiStatusCategory>,
}

impl From<ApiStatus> for Status {
    fn from(api: ApiStatus) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            name: api.name,
            description: api.description,
            icon_url: api.icon_url,
            status_category: api.status_category.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPriority {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub status_color: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
}

impl From<ApiPriority> for Priority {
    fn from(api: ApiPriority) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            name: api.name,
            status_color: api.status_color,
            description: api.description,
            icon_url: api.icon_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiResolution {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<ApiResolution> for Resolution {
    fn from(api: ApiResolution) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            name: api.name,
            description: api.description,
        }
    }
}

/// Envelope of `GET /issueLinkType`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIssueLinkTypesResponse {
    pub issue_link_types: Vec<ApiIssueLinkType>,
}

#[derive(Debug, Deserialize)]
pub struct ApiIssueLinkType {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub inward: String,
    pub outward: String,
}

impl From<ApiIssueLinkType> for IssueLinkType {
    fn from(api: ApiIssueLinkType) -> Self {
        Self {
            self_uri: api.self_uri,
            id: api.id,
            name: api.name,
            inward: api.inward,
            outward: api.outward,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiField {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub navigable: bool,
    #[serde(default)]
    pub searchable: bool,
    pub schema: Option<ApiFieldSchema>,
}

#[derive(Debug, Deserialize)]
pub struct ApiFieldSchema {
    #[serde(rename = "type")]
    pub field_type: String,
}

impl From<ApiField> for Field {
    fn from(api: ApiField) -> Self {
        Self {
            id: api.id,
            name: api.name,
            custom: api.custom,
            orderable: api.orderable,
            navigable: api.navigable,
            searchable: api.searchable,
            schema_type: api.schema.map(|s| s.field_type),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiServerInfo {
    pub base_url: Url,
    pub version: String,
    #[serde(default)]
    pub build_number: i64,
    #[serde(default)]
    pub server_title: String,
    pub deployment_type: Option<String>,
}

impl From<ApiServerInfo> for ServerInfo {
    fn from(api: ApiServerInfo) -> Self {
        Self {
            base_url: api.base_url,
            version: api.version,
            build_number: api.build_number,
            server_title: api.server_title,
            deployment_type: api.deployment_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_type_with_string_id() {
        let json = r#"{
            "self": "https://jira.example.com/rest/api/2/issuetype/3",
            "id": "3",
            "description": "A task that needs to be done.",
            "iconUrl": "https://jira.example.com/images/icons/task.png",
            "name": "Task",
            "subtask": false,
            "avatarId": 10318
        }"#;

        let issue_type: IssueType = serde_json::from_str::<ApiIssueType>(json).unwrap().into();
        assert_eq!(issue_type.id, 3);
        assert_eq!(issue_type.name, "Task");
        assert!(!issue_type.is_subtask);
        assert_eq!(
            issue_type.icon_uri.unwrap().as_str(),
            "https://jira.example.com/images/icons/task.png"
        );
    }

    #[test]
    fn test_status_category_with_numeric_id() {
        let json = r#"{
            "self": "https://jira.example.com/rest/api/2/status/10000",
            "description": "",
            "iconUrl": "https://jira.example.com/",
            "name": "To Do",
            "id": "10000",
            "statusCategory": {
                "self": "https://jira.example.com/rest/api/2/statuscategory/2",
                "id": 2,
                "key": "new",
                "colorName": "blue-gray",
                "name": "To Do"
            }
        }"#;

        let status: Status = serde_json::from_str::<ApiStatus>(json).unwrap().into();
        assert_eq!(status.id, 10000);
        let category = status.status_category.unwrap();
        assert_eq!(category.id, 2);
        assert_eq!(category.key, "new");
        assert_eq!(category.color_name.as_deref(), Some("blue-gray"));
    }

    #[test]
    fn test_invalid_id_is_rejected() {
        let json = r#"{"id": "abc", "name": "Fixed"}"#;
        assert!(serde_json::from_str::<ApiResolution>(json).is_err());
    }

    #[test]
    fn test_field_schema_type() {
        let json = r#"[
            {"id": "summary", "name": "Summary", "custom": false, "orderable": true,
             "navigable": true, "searchable": true, "schema": {"type": "string", "system": "summary"}},
            {"id": "issuekey", "name": "Key"}
        ]"#;

        let fields: Vec<Field> = serde_json::from_str::<Vec<ApiField>>(json)
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect();
        assert_eq!(fields[0].schema_type.as_deref(), Some("string"));
        assert!(fields[1].schema_type.is_none());
        assert!(!fields[1].custom);
    }
}
