use serde::Serialize;
use url::Url;

/// Issue type (Bug, Task, Sub-task, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub is_subtask: bool,
    pub description: Option<String>,
    pub icon_uri: Option<Url>,
}

/// Workflow status category (To Do, In Progress, Done)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub key: String,
    pub name: String,
    pub color_name: Option<String>,
}

/// Workflow status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
    pub status_category: Option<StatusCategory>,
}

/// Issue priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub status_color: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<Url>,
}

/// Issue resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Issue link type (Blocks, Duplicates, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkType {
    #[serde(rename = "self")]
    pub self_uri: Option<Url>,
    pub id: i64,
    pub name: String,
    pub inward: String,
    pub outward: String,
}

/// Issue field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    pub name: String,
    pub custom: bool,
    pub orderable: bool,
    pub navigable: bool,
    pub searchable: bool,
    pub schema_type: Option<String>,
}

/// Server version information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub base_url: Url,
    pub version: String,
    pub build_number: i64,
    pub server_title: String,
    pub deployment_type: Option<String>,
}

/// Anything in the metadata catalog addressed by its `self` URI
pub trait SelfLinked {
    fn self_uri(&self) -> Option<&Url>;
}

impl SelfLinked for IssueType {
    fn self_uri(&self) -> Option<&Url> {
        self.self_uri.as_ref()
    }
}

impl SelfLinked for Status {
    fn self_uri(&self) -> Option<&Url> {
        self.self_uri.as_ref()
    }
}

impl SelfLinked for Priority {
    fn self_uri(&self) -> Option<&Url> {
        self.self_uri.as_ref()
    }
}

impl SelfLinked for Resolution {
    fn self_uri(&self) -> Option<&Url> {
        self.self_uri.as_ref()
    }
}
