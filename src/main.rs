use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use jamira::cache::CacheStore;
use jamira::cli::args::{CompletionsArgs, OutputFormat};
use jamira::cli::commands;
use jamira::cli::{Cli, Commands};
use jamira::config::{Account, Config, Paths};
use jamira::context::AccountContext;
use jamira::error::JamiraError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}: {}", "hint".yellow(), hint);
        }
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    // 0 = warn, 1 = info, 2+ = debug; RUST_LOG wins when set
    let default = match verbose {
        0 => "jamira=warn",
        1 => "jamira=info",
        _ => "jamira=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run() -> Result<(), JamiraError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle completions command early (no config needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = Paths::new()?;
    let config = Config::load_from(&paths)?;
    let format = cli
        .output
        .or_else(|| OutputFormat::from_config(&config.output.format))
        .unwrap_or_default();

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Account(args) => commands::account(&paths, &config, args, format)?,
        Commands::Config(args) => commands::config(&paths, &config, args, format)?,
        Commands::Cache(args) => {
            let account = Account::load(&paths, &args.account)?;
            let store = CacheStore::new(config.cache_root(&paths), &account.name)?;
            commands::cache(&store, &config.cache_policy()?, args, format)?
        }
        Commands::List(args) => {
            let account = Account::load(&paths, &args.account)?;
            let context = AccountContext::from_account(&account, &config, &paths)?;
            commands::list(&context, args, format)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
