use colored::Colorize;

use crate::cache::{CachePolicy, ResourceKind};
use crate::cli::args::{ConfigArgs, ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::Result;
use crate::ttl::format_ttl;

/// Handle the config command
pub fn config(
    paths: &Paths,
    config: &Config,
    args: &ConfigArgs,
    format: OutputFormat,
) -> Result<String> {
    match &args.command {
        ConfigCommands::Show => config_show(paths, config, format),
        ConfigCommands::Path => config_path(paths, format),
    }
}

/// Show effective configuration
fn config_show(paths: &Paths, config: &Config, format: OutputFormat) -> Result<String> {
    let policy = config.cache_policy()?;
    let cache_root = config.cache_root(paths);

    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("{}\n", "Configuration".bold()));
            output.push_str(&"─".repeat(40));
            output.push('\n');

            // Cache section
            output.push_str(&format!("\n{}\n", "[cache]".cyan()));
            output.push_str(&format!("  dir = {}\n", cache_root.display()));

            output.push_str(&format!("\n{}\n", "[cache.ttl]".cyan()));
            for kind in ResourceKind::ALL {
                let ttl = format_ttl(policy.ttl(kind));
                let source = if config.cache.ttl.get(kind).is_some() {
                    String::new()
                } else {
                    format!(" {}", "(default)".dimmed())
                };
                output.push_str(&format!("  {} = {}{}\n", ttl_key(kind), ttl, source));
            }

            // Output section
            output.push_str(&format!("\n{}\n", "[output]".cyan()));
            output.push_str(&format!("  format = {}\n", config.output.format));

            Ok(output)
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "cache": {
                    "dir": cache_root.display().to_string(),
                    "ttl": ttl_json(&policy),
                },
                "output": {
                    "format": config.output.format,
                }
            });
            Ok(serde_json::to_string_pretty(&json)?)
        }
    }
}

/// Key used for a kind under `[cache.ttl]`
fn ttl_key(kind: ResourceKind) -> &'static str {
    kind.file_name().trim_end_matches(".json")
}

fn ttl_json(policy: &CachePolicy) -> serde_json::Value {
    ResourceKind::ALL
        .iter()
        .map(|&kind| {
            (
                ttl_key(kind).to_string(),
                serde_json::Value::String(format_ttl(policy.ttl(kind))),
            )
        })
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// Show configuration file path
fn config_path(paths: &Paths, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => {
            let mut output = String::new();
            output.push_str(&format!("Config file: {}\n", paths.config_file.display()));
            output.push_str(&format!(
                "Exists: {}\n",
                if paths.config_exists() {
                    "yes".green()
                } else {
                    "no".yellow()
                }
            ));
            Ok(output)
        }
        OutputFormat::Json => {
            let result = serde_json::json!({
                "path": paths.config_file.display().to_string(),
                "exists": paths.config_exists()
            });
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}
