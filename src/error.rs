use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Jamira operations
pub type Result<T> = std::result::Result<T, JamiraError>;

/// Errors that can occur during Jamira operations
#[derive(Error, Debug)]
pub enum JamiraError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API error with HTTP status
    #[error("Jira API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Failed to write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Metadata cache error
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// No accounts configured at all
    #[error("No account configured. Run 'jamira account add' first.")]
    NoAccountSetup,

    /// Named account does not exist
    #[error("No such account: {0}")]
    NoSuchAccount(String),

    /// Account already exists
    #[error("Account already exists: {0}")]
    AccountExists(String),

    /// Metadata item looked up by name was not found
    #[error("No such {kind}: {name}")]
    NotFound { kind: &'static str, name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl JamiraError {
    /// Create an API error from HTTP status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error for a metadata lookup by name
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Suggested next step to show below the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoSuchAccount(_) => Some("Run 'jamira account list' to see saved accounts."),
            Self::Api { status: 401, .. } => {
                Some("Check the account's username and password, or re-add it with 'jamira account add'.")
            }
            Self::Cache(CacheError::Read { .. }) => {
                Some("Run 'jamira cache clear' to discard the cached metadata.")
            }
            Self::Toml(_) => Some("Run 'jamira config path' to locate the config file."),
            _ => None,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::Toml(_)
            | Self::TomlSerialize(_)
            | Self::NoAccountSetup
            | Self::NoSuchAccount(_)
            | Self::AccountExists(_)
            | Self::InvalidArgument(_) => 2,
            Self::Api { .. } | Self::Http(_) => 3,
            _ => 1,
        }
    }
}

/// Errors raised by the on-disk metadata cache
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache file missing, unreadable or undecodable
    #[error("Failed to read cache file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: CacheIoError,
    },

    /// Persisting a freshly fetched value failed
    #[error("Failed to write cache file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: CacheIoError,
    },

    /// Account name cannot be used as a cache directory
    #[error("Invalid account name for cache directory: '{0}'")]
    InvalidAccount(String),
}

/// Underlying cause of a cache read or write failure
#[derive(Error, Debug)]
pub enum CacheIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

impl CacheError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: impl Into<CacheIoError>) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: impl Into<CacheIoError>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}
