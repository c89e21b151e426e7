use colored::{ColoredString, Colorize};

use crate::jira::{Field, IssueLinkType, IssueType, Priority, Resolution, Status};

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > max_chars {
        let truncated: String = chars.iter().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

fn header(output: &mut String, title: &str, width: usize) {
    output.push_str(&format!("{}\n", title.bold()));
    output.push_str(&"─".repeat(width));
    output.push('\n');
}

/// Jira status category colors as terminal colors
fn category_colored(name: &str, color_name: Option<&str>) -> ColoredString {
    match color_name {
        Some("green") => name.green(),
        Some("yellow") => name.yellow(),
        Some("blue-gray") | Some("medium-gray") => name.blue(),
        _ => name.dimmed(),
    }
}

/// Format issue types for pretty output
pub fn format_issue_types(issue_types: &[IssueType]) -> String {
    if issue_types.is_empty() {
        return "No issue types found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Issue Types", 70);

    for issue_type in issue_types {
        let subtask = if issue_type.is_subtask {
            format!(" [{}]", "sub-task".magenta())
        } else {
            String::new()
        };
        output.push_str(&format!(
            "{:>6}  {}{}\n",
            issue_type.id.to_string().dimmed(),
            issue_type.name.bold(),
            subtask
        ));
        if let Some(ref description) = issue_type.description {
            if !description.is_empty() {
                output.push_str(&format!("        {}\n", truncate_str(description, 60).dimmed()));
            }
        }
    }

    output
}

/// Format statuses for pretty output
pub fn format_statuses(statuses: &[Status]) -> String {
    if statuses.is_empty() {
        return "No statuses found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Statuses", 70);

    for status in statuses {
        let category = status
            .status_category
            .as_ref()
            .map(|c| category_colored(&c.name, c.color_name.as_deref()).to_string())
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>6}  {:30} {}\n",
            status.id.to_string().dimmed(),
            status.name.bold(),
            category
        ));
    }

    output
}

/// Format priorities for pretty output
pub fn format_priorities(priorities: &[Priority]) -> String {
    if priorities.is_empty() {
        return "No priorities found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Priorities", 70);

    for priority in priorities {
        output.push_str(&format!(
            "{:>6}  {:20} {}\n",
            priority.id.to_string().dimmed(),
            priority.name.bold(),
            priority.status_color.as_deref().unwrap_or("").dimmed()
        ));
        if let Some(ref description) = priority.description {
            if !description.is_empty() {
                output.push_str(&format!("        {}\n", truncate_str(description, 60).dimmed()));
            }
        }
    }

    output
}

/// Format resolutions for pretty output
pub fn format_resolutions(resolutions: &[Resolution]) -> String {
    if resolutions.is_empty() {
        return "No resolutions found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Resolutions", 70);

    for resolution in resolutions {
        output.push_str(&format!(
            "{:>6}  {}\n",
            resolution.id.to_string().dimmed(),
            resolution.name.bold()
        ));
        if let Some(ref description) = resolution.description {
            if !description.is_empty() {
                output.push_str(&format!("        {}\n", truncate_str(description, 60).dimmed()));
            }
        }
    }

    output
}

/// Format issue link types for pretty output
pub fn format_issue_link_types(link_types: &[IssueLinkType]) -> String {
    if link_types.is_empty() {
        return "No issue link types found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Issue Link Types", 70);

    for link_type in link_types {
        output.push_str(&format!(
            "{:>6}  {}\n",
            link_type.id.to_string().dimmed(),
            link_type.name.bold()
        ));
        output.push_str(&format!(
            "        {} {}  {} {}\n",
            "Outward:".cyan(),
            link_type.outward,
            "Inward:".cyan(),
            link_type.inward
        ));
    }

    output
}

/// Format fields for pretty output
pub fn format_fields(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "No fields found.".to_string();
    }

    let mut output = String::new();
    header(&mut output, "Fields", 80);

    for field in fields {
        let custom = if field.custom {
            "custom".magenta()
        } else {
            "system".dimmed()
        };
        output.push_str(&format!(
            "{:30} {:30} {:8} {}\n",
            truncate_str(&field.id, 30),
            truncate_str(&field.name, 30).bold(),
            custom,
            field.schema_type.as_deref().unwrap_or("").dimmed()
        ));
    }

    output
}
