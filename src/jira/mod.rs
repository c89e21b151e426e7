mod api_types;
mod client;
pub mod metadata;
pub mod types;

pub use client::JiraClient;
pub use metadata::{issue_type_by_name, priority_by_name, ForwardMetadata, MetadataClient};
pub use types::*;
