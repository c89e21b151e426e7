use colored::Colorize;
use url::Url;

use crate::cache::CacheStore;
use crate::cli::args::{AccountArgs, AccountCommands, OutputFormat};
use crate::config::{Account, Config, Paths};
use crate::error::{JamiraError, Result};

/// Handle the account command
pub fn account(
    paths: &Paths,
    config: &Config,
    args: &AccountArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        AccountCommands::Add {
            name,
            username,
            password,
            uri,
        } => account_add(paths, name, username, password.as_deref(), uri, format),
        AccountCommands::Remove { name } => account_remove(paths, config, name, format),
        AccountCommands::List => account_list(paths, format),
    }
}

fn account_add(
    paths: &Paths,
    name: &str,
    username: &str,
    password: Option<&str>,
    uri: &Url,
    format: OutputFormat,
) -> Result<String> {
    Account::validate_name(name)?;
    if Account::exists(paths, name) {
        return Err(JamiraError::AccountExists(name.to_string()));
    }

    let password = match password {
        Some(password) => password.to_string(),
        None => prompt_password(username, uri)?,
    };
    if password.is_empty() {
        return Err(JamiraError::InvalidArgument(
            "Password cannot be empty".to_string(),
        ));
    }

    let account = Account::new(name, username, password, uri.clone());
    account.save(paths)?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Added account {} ({}@{})",
            "✓".green(),
            name.bold(),
            username,
            uri
        )),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "added",
                "name": name,
                "username": username,
                "server_uri": uri.as_str(),
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn prompt_password(username: &str, uri: &Url) -> Result<String> {
    let host = uri.host_str().unwrap_or(uri.as_str());
    Ok(rpassword::prompt_password(format!(
        "Password for {}@{}: ",
        username, host
    ))?)
}

fn account_remove(
    paths: &Paths,
    config: &Config,
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    Account::remove(paths, name)?;

    // The account's cached metadata goes with it
    CacheStore::new(config.cache_root(paths), name)?.clear()?;

    match format {
        OutputFormat::Pretty => Ok(format!("{} Removed account {}", "✓".green(), name)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "removed",
                "name": name,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn account_list(paths: &Paths, format: OutputFormat) -> Result<String> {
    let accounts = Account::list(paths)?;

    match format {
        OutputFormat::Pretty => {
            if accounts.is_empty() {
                return Ok(format!(
                    "No accounts configured. Run '{}' to add one.",
                    "jamira account add".cyan()
                ));
            }

            let mut output = String::new();
            output.push_str(&format!("{}\n", "Accounts".bold()));
            output.push_str(&"─".repeat(60));
            output.push('\n');

            for (i, account) in accounts.iter().enumerate() {
                let marker = if i == 0 {
                    format!(" {}", "(default)".green())
                } else {
                    String::new()
                };
                output.push_str(&format!("{}{}\n", account.name.bold(), marker));
                output.push_str(&format!("  {} {}\n", "User:".cyan(), account.username));
                output.push_str(&format!("  {} {}\n", "Server:".cyan(), account.server_uri));
            }

            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => {
            // Never print passwords
            let json: Vec<_> = accounts
                .iter()
                .enumerate()
                .map(|(i, account)| {
                    serde_json::json!({
                        "name": account.name,
                        "username": account.username,
                        "server_uri": account.server_uri.as_str(),
                        "default": i == 0,
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}
