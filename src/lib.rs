pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod jira;
pub mod output;
pub mod ttl;
