use crate::cli::args::{ListArgs, ListTarget, OutputFormat};
use crate::context::AccountContext;
use crate::error::{JamiraError, Result};
use crate::jira::{issue_type_by_name, priority_by_name, MetadataClient};
use crate::output;

/// Handle the list command
pub fn list(context: &AccountContext, args: &ListArgs, format: OutputFormat) -> Result<String> {
    let cached = context.metadata_client()?;
    let client: &dyn MetadataClient = &cached;

    if let Some(name) = &args.name {
        return find_by_name(client, args.what, name, format);
    }

    match args.what {
        ListTarget::IssueTypes => output::format_issue_types(&client.issue_types()?, format),
        ListTarget::Statuses => output::format_statuses(&client.statuses()?, format),
        ListTarget::Priorities => output::format_priorities(&client.priorities()?, format),
        ListTarget::Resolutions => output::format_resolutions(&client.resolutions()?, format),
        ListTarget::IssueLinkTypes => {
            output::format_issue_link_types(&client.issue_link_types()?, format)
        }
        ListTarget::Fields => output::format_fields(&client.fields()?, format),
    }
}

/// Single issue type or priority looked up by name
fn find_by_name(
    client: &dyn MetadataClient,
    what: ListTarget,
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    match what {
        ListTarget::IssueTypes => {
            output::format_issue_types(&[issue_type_by_name(client, name)?], format)
        }
        ListTarget::Priorities => {
            output::format_priorities(&[priority_by_name(client, name)?], format)
        }
        _ => Err(JamiraError::InvalidArgument(
            "--name only applies to issue-types and priorities".to_string(),
        )),
    }
}
