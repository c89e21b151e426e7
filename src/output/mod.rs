pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::jira::{Field, IssueLinkType, IssueType, Priority, Resolution, Status};

/// Format issue types based on output format
pub fn format_issue_types(issue_types: &[IssueType], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_issue_types(issue_types)),
        OutputFormat::Json => json::format_json(issue_types),
    }
}

/// Format statuses based on output format
pub fn format_statuses(statuses: &[Status], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_statuses(statuses)),
        OutputFormat::Json => json::format_json(statuses),
    }
}

/// Format priorities based on output format
pub fn format_priorities(priorities: &[Priority], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_priorities(priorities)),
        OutputFormat::Json => json::format_json(priorities),
    }
}

/// Format resolutions based on output format
pub fn format_resolutions(resolutions: &[Resolution], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_resolutions(resolutions)),
        OutputFormat::Json => json::format_json(resolutions),
    }
}

/// Format issue link types based on output format
pub fn format_issue_link_types(
    link_types: &[IssueLinkType],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_issue_link_types(link_types)),
        OutputFormat::Json => json::format_json(link_types),
    }
}

/// Format fields based on output format
pub fn format_fields(fields: &[Field], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_fields(fields)),
        OutputFormat::Json => json::format_json(fields),
    }
}
