use std::fmt;

/// Metadata catalogs that are cached on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    IssueTypes,
    Statuses,
    Priorities,
    Resolutions,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::IssueTypes,
        ResourceKind::Statuses,
        ResourceKind::Priorities,
        ResourceKind::Resolutions,
    ];

    /// File name inside the account's cache directory
    pub fn file_name(self) -> &'static str {
        match self {
            Self::IssueTypes => "issue-types.json",
            Self::Statuses => "statuses.json",
            Self::Priorities => "priorities.json",
            Self::Resolutions => "resolutions.json",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Self::IssueTypes => "issue types",
            Self::Statuses => "statuses",
            Self::Priorities => "priorities",
            Self::Resolutions => "resolutions",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_file_names_are_distinct() {
        let names: HashSet<_> = ResourceKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ResourceKind::IssueTypes.file_name(), "issue-types.json");
        assert_eq!(ResourceKind::Statuses.file_name(), "statuses.json");
        assert_eq!(ResourceKind::Priorities.file_name(), "priorities.json");
        assert_eq!(ResourceKind::Resolutions.file_name(), "resolutions.json");
    }
}
