use clap::{Parser, Subcommand};
use porcelain_state::commands::*;
use porcelain_state::core::{cache, config::StateConfig, error::Result, print_error};

#[derive(Parser)]
#[command(name = "porcelain-state")]
#[command(about = "Typed, cached views of git rebase and reflog state")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print machine-readable JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the done and pending instructions of the current rebase
    Rebase,
    /// Show the reflog of a reference with classified actions
    Reflog {
        /// Reference whose reflog to show (defaults to HEAD)
        reference: Option<String>,
        /// Limit the number of entries
        #[arg(short = 'n', long = "max-count")]
        max_count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag; RUST_LOG still wins when set
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = StateConfig::load_or_default().unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {e}");
        StateConfig::default()
    });
    cache::install_global(config.build_cache());

    let result = match cli.command {
        Commands::Rebase => execute_rebase(cli.json),
        Commands::Reflog {
            reference,
            max_count,
        } => execute_reflog(reference, max_count.or(config.reflog_limit), cli.json),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
