//! The metadata capability set shared by the remote and cached clients.

use url::Url;

use super::types::{Field, IssueLinkType, IssueType, Priority, Resolution, ServerInfo, Status};
use crate::error::{JamiraError, Result};

/// Read-only access to a Jira server's global metadata catalog.
///
/// Calls block until the value (or error) is available.
pub trait MetadataClient {
    fn issue_types(&self) -> Result<Vec<IssueType>>;
    fn issue_type(&self, uri: &Url) -> Result<IssueType>;

    fn statuses(&self) -> Result<Vec<Status>>;
    fn status(&self, uri: &Url) -> Result<Status>;

    fn priorities(&self) -> Result<Vec<Priority>>;
    fn priority(&self, uri: &Url) -> Result<Priority>;

    fn resolutions(&self) -> Result<Vec<Resolution>>;
    fn resolution(&self, uri: &Url) -> Result<Resolution>;

    fn issue_link_types(&self) -> Result<Vec<IssueLinkType>>;
    fn fields(&self) -> Result<Vec<Field>>;
    fn server_info(&self) -> Result<ServerInfo>;
}

/// A metadata client that wraps another one.
///
/// Every operation forwards to [`ForwardMetadata::remote`] unless the
/// implementor overrides it, so decorators only spell out the calls they
/// change. Any `ForwardMetadata` is a [`MetadataClient`].
pub trait ForwardMetadata {
    fn remote(&self) -> &dyn MetadataClient;

    fn issue_types(&self) -> Result<Vec<IssueType>> {
        self.remote().issue_types()
    }

    fn issue_type(&self, uri: &Url) -> Result<IssueType> {
        self.remote().issue_type(uri)
    }

    fn statuses(&self) -> Result<Vec<Status>> {
        self.remote().statuses()
    }

    fn status(&self, uri: &Url) -> Result<Status> {
        self.remote().status(uri)
    }

    fn priorities(&self) -> Result<Vec<Priority>> {
        self.remote().priorities()
    }

    fn priority(&self, uri: &Url) -> Result<Priority> {
        self.remote().priority(uri)
    }

    fn resolutions(&self) -> Result<Vec<Resolution>> {
        self.remote().resolutions()
    }

    fn resolution(&self, uri: &Url) -> Result<Resolution> {
        self.remote().resolution(uri)
    }

    fn issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        self.remote().issue_link_types()
    }

    fn fields(&self) -> Result<Vec<Field>> {
        self.remote().fields()
    }

    fn server_info(&self) -> Result<ServerInfo> {
        self.remote().server_info()
    }
}

impl<T: ForwardMetadata> MetadataClient for T {
    fn issue_types(&self) -> Result<Vec<IssueType>> {
        ForwardMetadata::issue_types(self)
    }

    fn issue_type(&self, uri: &Url) -> Result<IssueType> {
        ForwardMetadata::issue_type(self, uri)
    }

    fn statuses(&self) -> Result<Vec<Status>> {
        ForwardMetadata::statuses(self)
    }

    fn status(&self, uri: &Url) -> Result<Status> {
        ForwardMetadata::status(self, uri)
    }

    fn priorities(&self) -> Result<Vec<Priority>> {
        ForwardMetadata::priorities(self)
    }

    fn priority(&self, uri: &Url) -> Result<Priority> {
        ForwardMetadata::priority(self, uri)
    }

    fn resolutions(&self) -> Result<Vec<Resolution>> {
        ForwardMetadata::resolutions(self)
    }

    fn resolution(&self, uri: &Url) -> Result<Resolution> {
        ForwardMetadata::resolution(self, uri)
    }

    fn issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
        ForwardMetadata::issue_link_types(self)
    }

    fn fields(&self) -> Result<Vec<Field>> {
        ForwardMetadata::fields(self)
    }

    fn server_info(&self) -> Result<ServerInfo> {
        ForwardMetadata::server_info(self)
    }
}

/// Find an issue type by name, ignoring case
pub fn issue_type_by_name(client: &dyn MetadataClient, name: &str) -> Result<IssueType> {
    client
        .issue_types()?
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| JamiraError::not_found("issue type", name))
}

/// Find a priority by name, ignoring case
pub fn priority_by_name(client: &dyn MetadataClient, name: &str) -> Result<Priority> {
    client
        .priorities()?
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| JamiraError::not_found("priority", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Remote stub that answers only issue types and server info
    struct StubRemote {
        calls: Cell<usize>,
    }

    impl MetadataClient for StubRemote {
        fn issue_types(&self) -> Result<Vec<IssueType>> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![IssueType {
                self_uri: None,
                id: 1,
                name: "Bug".to_string(),
                is_subtask: false,
                description: None,
                icon_uri: None,
            }])
        }
        fn issue_type(&self, _uri: &Url) -> Result<IssueType> {
            Err(JamiraError::api(404, "missing"))
        }
        fn statuses(&self) -> Result<Vec<Status>> {
            Ok(Vec::new())
        }
        fn status(&self, _uri: &Url) -> Result<Status> {
            Err(JamiraError::api(404, "missing"))
        }
        fn priorities(&self) -> Result<Vec<Priority>> {
            Ok(vec![Priority {
                self_uri: None,
                id: 2,
                name: "High".to_string(),
                status_color: None,
                description: None,
                icon_url: None,
            }])
        }
        fn priority(&self, _uri: &Url) -> Result<Priority> {
            Err(JamiraError::api(404, "missing"))
        }
        fn resolutions(&self) -> Result<Vec<Resolution>> {
            Ok(Vec::new())
        }
        fn resolution(&self, _uri: &Url) -> Result<Resolution> {
            Err(JamiraError::api(404, "missing"))
        }
        fn issue_link_types(&self) -> Result<Vec<IssueLinkType>> {
            Ok(Vec::new())
        }
        fn fields(&self) -> Result<Vec<Field>> {
            Ok(Vec::new())
        }
        fn server_info(&self) -> Result<ServerInfo> {
            Ok(ServerInfo {
                base_url: Url::parse("https://jira.example.com").unwrap(),
                version: "8.20.0".to_string(),
                build_number: 820000,
                server_title: "Example".to_string(),
                deployment_type: Some("Server".to_string()),
            })
        }
    }

    /// Decorator overriding nothing
    struct Passthrough {
        inner: StubRemote,
    }

    impl ForwardMetadata for Passthrough {
        fn remote(&self) -> &dyn MetadataClient {
            &self.inner
        }
    }

    fn passthrough() -> Passthrough {
        Passthrough {
            inner: StubRemote {
                calls: Cell::new(0),
            },
        }
    }

    #[test]
    fn test_unlisted_operations_forward_to_remote() {
        let client = passthrough();
        let as_client: &dyn MetadataClient = &client;

        assert_eq!(as_client.issue_types().unwrap()[0].name, "Bug");
        assert_eq!(as_client.server_info().unwrap().version, "8.20.0");
        assert_eq!(client.inner.calls.get(), 1);
    }

    #[test]
    fn test_forwarded_errors_are_unchanged() {
        let client = passthrough();
        let as_client: &dyn MetadataClient = &client;
        let uri = Url::parse("https://jira.example.com/rest/api/2/status/1").unwrap();

        let err = as_client.status(&uri).unwrap_err();
        assert!(matches!(err, JamiraError::Api { status: 404, .. }));
    }

    #[test]
    fn test_issue_type_by_name_ignores_case() {
        let client = passthrough();
        assert_eq!(issue_type_by_name(&client, "bug").unwrap().id, 1);
    }

    #[test]
    fn test_priority_by_name_not_found() {
        let client = passthrough();
        let err = priority_by_name(&client, "Blocker").unwrap_err();
        assert_eq!(err.to_string(), "No such priority: Blocker");
    }
}
