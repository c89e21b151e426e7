//! Saved login information for Jira servers
//!
//! Each account lives in `~/.jamira/accounts/<name>.toml`. The account name
//! also scopes that account's metadata cache directory.

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::paths::Paths;
use crate::error::{JamiraError, Result};

/// Name that resolves to the first configured account
pub const DEFAULT_ACCOUNT: &str = "default";

/// Login information for one Jira install
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Short name, taken from the file name
    #[serde(skip)]
    pub name: String,
    pub username: String,
    pub password: String,
    pub server_uri: Url,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        server_uri: Url,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            server_uri,
        }
    }

    /// Check that a name is usable as an account (and cache directory) name
    pub fn validate_name(name: &str) -> Result<()> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        if !valid {
            return Err(JamiraError::InvalidArgument(format!(
                "Account name '{}' must match [a-z0-9_-]+",
                name
            )));
        }
        if name == DEFAULT_ACCOUNT {
            return Err(JamiraError::InvalidArgument(format!(
                "'{}' is reserved for the first configured account",
                DEFAULT_ACCOUNT
            )));
        }
        Ok(())
    }

    /// Check whether an account file exists
    pub fn exists(paths: &Paths, name: &str) -> bool {
        paths.account_file(name).exists()
    }

    /// Resolve an account by name; `default` picks the first one alphabetically
    pub fn load(paths: &Paths, name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case(DEFAULT_ACCOUNT) {
            return Self::list(paths)?
                .into_iter()
                .next()
                .ok_or(JamiraError::NoAccountSetup);
        }

        if !Self::exists(paths, name) {
            return Err(JamiraError::NoSuchAccount(name.to_string()));
        }
        Self::read(paths, name)
    }

    fn read(paths: &Paths, name: &str) -> Result<Self> {
        let contents = fs::read_to_string(paths.account_file(name))?;
        let mut account: Account = toml::from_str(&contents)?;
        account.name = name.to_string();
        Ok(account)
    }

    /// All configured accounts, sorted by name
    pub fn list(paths: &Paths) -> Result<Vec<Self>> {
        if !paths.accounts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = fs::read_dir(&paths.accounts_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                    return None;
                }
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .collect();
        names.sort();

        names.iter().map(|name| Self::read(paths, name)).collect()
    }

    /// Write the account file with owner-only permissions
    pub fn save(&self, paths: &Paths) -> Result<()> {
        paths.ensure_dirs()?;
        let file = paths.account_file(&self.name);
        let contents = toml::to_string_pretty(self)?;
        fs::write(&file, contents)?;

        // Account file contains a password
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&file, perms)?;
        }

        Ok(())
    }

    /// Delete an account file
    pub fn remove(paths: &Paths, name: &str) -> Result<()> {
        if !Self::exists(paths, name) {
            return Err(JamiraError::NoSuchAccount(name.to_string()));
        }
        fs::remove_file(paths.account_file(name))?;
        Ok(())
    }
}
