use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DEFAULT_ACCOUNT;

/// A command-line client for Jira with a local metadata cache
#[derive(Parser)]
#[command(name = "jamira")]
#[command(version, propagate_version = true)]
#[command(about = "A command-line client for Jira with a local metadata cache")]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        clap_complete::generate(shell, &mut cmd, "jamira", &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Parse the `[output] format` config value
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved Jira accounts
    Account(AccountArgs),

    /// List server metadata
    #[command(alias = "ls")]
    List(ListArgs),

    /// Inspect or clear the metadata cache
    Cache(CacheArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the account command
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommands,
}

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Save login information for a Jira server
    Add {
        /// Short name for the account ([a-z0-9_-]+)
        name: String,
        /// Jira username
        username: String,
        /// Jira password or API token (prompted for if omitted)
        #[arg(long, env = "JAMIRA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Server URI, e.g. https://jira.example.com
        uri: Url,
    },
    /// Delete a saved account and its cache
    #[command(alias = "rm")]
    Remove {
        /// Account name
        name: String,
    },
    /// List saved accounts
    List,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum)]
    pub what: ListTarget,

    /// Account to use
    #[arg(short, long, default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// Show only the entry with this name, ignoring case (issue-types, priorities)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Metadata catalogs that can be listed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListTarget {
    IssueTypes,
    Statuses,
    Priorities,
    Resolutions,
    IssueLinkTypes,
    Fields,
}

/// Arguments for the cache command
#[derive(Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,

    /// Account whose cache to use
    #[arg(short, long, default_value = DEFAULT_ACCOUNT, global = true)]
    pub account: String,
}

/// Cache subcommands
#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show cache status
    Status,
    /// Clear cached metadata
    Clear,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
