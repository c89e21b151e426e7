//! Cache management commands

use colored::Colorize;

use crate::cache::{CachePolicy, CacheStore};
use crate::cli::args::{CacheArgs, CacheCommands, OutputFormat};
use crate::error::Result;
use crate::ttl::format_ttl;

/// Handle cache commands for one account's cache
pub fn cache(
    store: &CacheStore,
    policy: &CachePolicy,
    args: &CacheArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        CacheCommands::Status => status(store, policy, format),
        CacheCommands::Clear => clear(store, format),
    }
}

fn status(store: &CacheStore, policy: &CachePolicy, format: OutputFormat) -> Result<String> {
    let entries = store.status(policy);

    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Cache Status".bold()));
            output.push_str(&format!("Location: {}\n", store.account_dir().display()));

            for entry in &entries {
                output.push_str(&format!("\n{}\n", capitalize(entry.kind.label()).dimmed()));
                if !entry.exists {
                    output.push_str(&format!("  {}\n", "Not cached".dimmed()));
                    continue;
                }

                match entry.count {
                    Some(count) => output.push_str(&format!("  Entries: {}\n", count)),
                    None => output.push_str(&format!("  Entries: {}\n", "unreadable".red())),
                }
                if let Some(age) = entry.age_secs {
                    let freshness = if entry.fresh {
                        "(fresh)".green()
                    } else {
                        "(stale)".yellow()
                    };
                    output.push_str(&format!(
                        "  Age: {} {} {}\n",
                        format_age(age),
                        freshness,
                        format!("ttl {}", format_ttl(entry.ttl)).dimmed()
                    ));
                }
            }

            Ok(output.trim_end().to_string())
        }
        OutputFormat::Json => {
            let kinds: serde_json::Map<String, serde_json::Value> = entries
                .iter()
                .map(|entry| {
                    (
                        entry.kind.file_name().trim_end_matches(".json").to_string(),
                        serde_json::json!({
                            "path": entry.path.display().to_string(),
                            "exists": entry.exists,
                            "age_secs": entry.age_secs,
                            "count": entry.count,
                            "ttl_secs": entry.ttl.as_secs(),
                            "fresh": entry.fresh,
                        }),
                    )
                })
                .collect();
            let json = serde_json::json!({
                "cache_dir": store.account_dir().to_string_lossy(),
                "entries": kinds,
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn clear(store: &CacheStore, format: OutputFormat) -> Result<String> {
    store.clear()?;

    match format {
        OutputFormat::Pretty => Ok(format!("{} Cache cleared", "✓".green())),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "status": "cleared"
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format age in human-readable form
fn format_age(secs: u64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}
