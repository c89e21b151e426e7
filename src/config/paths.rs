use std::fs;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::error::{JamiraError, Result};

/// Environment variable overriding the Jamira home directory
pub const HOME_ENV: &str = "JAMIRA_HOME";

/// Manages paths for Jamira configuration and data
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory (~/.jamira)
    pub root: PathBuf,
    /// Configuration file path (~/.jamira/config.toml)
    pub config_file: PathBuf,
    /// Account definitions (~/.jamira/accounts)
    pub accounts_dir: PathBuf,
    /// Default metadata cache root (~/.jamira/cache)
    pub cache_dir: PathBuf,
}

impl Paths {
    /// Resolve paths from `JAMIRA_HOME`, falling back to `~/.jamira`
    pub fn new() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(PathBuf::from(home)));
        }

        let home = dirs::home_dir().ok_or_else(|| {
            JamiraError::Config(format!(
                "Could not determine home directory. Set {HOME_ENV} to choose one."
            ))
        })?;

        Ok(Self::with_root(home.join(".jamira")))
    }

    /// Lay out all paths beneath an explicit root
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            config_file: root.join("config.toml"),
            accounts_dir: root.join("accounts"),
            cache_dir: root.join("cache"),
            root,
        }
    }

    /// Ensure the root and accounts directories exist with owner-only permissions
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.accounts_dir)?;

        // Account files hold passwords (700 = owner only)
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o700);
            fs::set_permissions(&self.root, perms.clone())?;
            fs::set_permissions(&self.accounts_dir, perms)?;
        }

        Ok(())
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }

    /// Path of the definition file for an account
    pub fn account_file(&self, name: &str) -> PathBuf {
        self.accounts_dir.join(format!("{name}.toml"))
    }
}
