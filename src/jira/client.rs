use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::api_types::*;
use super::metadata::MetadataClient;
use super::types::{Field, IssueLinkType, IssueType, Priority, Resolution, ServerInfo, Status};
use crate::config::Account;
use crate::error::{JamiraError, Result};

const API_PATH: &str = "rest/api/2/";
const USER_AGENT: &str = concat!("jamira/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Jira REST client for a single account
pub struct JiraClient {
    client: Client,
    base_url: Url,
    username: String,
    password: String,
}

impl JiraClient {
    /// Create a new client from a saved account
    pub fn new(account: &Account) -> Result<Self> {
        Self::with_credentials(
            account.server_uri.clone(),
            &account.username,
            &account.password,
        )
    }

    /// Create a new client with explicit credentials
    pub fn with_credentials(
        server_uri: Url,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(server_uri),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Resolve an API path like `priority` against the server
    fn api_url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(API_PATH)
            .and_then(|api| api.join(path))
            .map_err(|e| JamiraError::InvalidArgument(format!("Invalid API path {path}: {e}")))
    }

    /// Make an authenticated GET request and decode the JSON body
    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(JamiraError::api(status.as_u16(), message));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(JamiraError::Json)
    }

    /// GET a collection endpoint and convert every element
    fn get_list<A, T>(&self, path: &str) -> Result<Vec<T>>
    where
        A: DeserializeOwned + Into<T>,
    {
        let items: Vec<A> = self.get(self.api_url(path)?)?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    /// GET a single item by its `self` URI
    fn get_by_uri<A, T>(&self, uri: &Url) -> Result<T>
    where
        A: DeserializeOwned + Into<T>,
    {
        self.validate_same_host(uri)?;
        let item: A = self.get(uri.clone())?;
        Ok(item.into())
    }

    /// Refuse to send credentials to a host other than the account's server
    fn validate_same_host(&self, uri: &Url) -> Result<()> {
        let same_origin = uri.scheme() == self.base_url.scheme()
            && uri.host_str() == self.base_url.host_str()
            && uri.port_or_known_default() == self.base_url.port_or_known_default();

        if !same_origin {
            return Err(JamiraError::InvalidArgument(format!(
                "URI {} is not on server {}",
                uri, self.base_url
            )));
        }
        Ok(())
    }
}

impl MetadataClient for JiraClient {
    fn issue_types(&self) -> Result<Vec<IssueType>> {
        self.get_list::<ApiIssueType, _>("issuetype")
    }

    fn issue_type(&self, uri: &Url) -> Result<IssueType> {
        self.get_by_uri::<ApiIssueType, _>(uri)
    }

    fn statuses(&self) -> Result<Vec<Status>> {
        self.get_list::<ApiStatus, _>("status")
    }

    fn status(&self, uri: &Url) -> Result<Status> {
        self.get_by_uri::<ApiStatus, _>(uri)
    }

    fn priorities(&self) -> Result<Vec<Priority>> {
        self.get_list::<ApiPriority, _>("priority")
    }

    fn priority(&self, uri: &Url) -> Result<Priority> {
        self.get_by_uri::<ApiPriority, _>(uri)
    }

    fn resolutions(&self) -> Result<Vec<Resolution>> {
        self.get_list::<ApiResolution, _>("resolution")
    }

    fn resolution(&self, uri: &Url) -> Result<Resolution> {
        self.get_by_uri::<ApiResolution, _>(uri)
    }

    fn issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        let response: ApiIssueLinkTypesResponse = self.get(self.api_url("issueLinkType")?)?;
        Ok(response
            .issue_link_types
            .into_iter()
            .map(Into::into)
            .collect())
    }

    fn fields(&self) -> Result<Vec<Field>> {
        self.get_list::<ApiField, _>("field")
    }

    fn server_info(&self) -> Result<ServerInfo> {
        let info: ApiServerInfo = self.get(self.api_url("serverInfo")?)?;
        Ok(info.into())
    }
}

/// `Url::join` drops the last path segment unless it ends with '/'
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
