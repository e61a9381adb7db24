//! # HealthStats CLI (`hstats`)
//!
//! ## Usage
//!
//! ```bash
//! hstats --config ./config/hstats.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `hstats serve` | Start the HTTP comparison server |
//! | `hstats stats <FILE>` | Print statistics of one document |
//! | `hstats compare <FILE>` | Compare one document against the baseline |
//! | `hstats baseline show` | Show the persisted baseline |
//! | `hstats baseline build` | Build the baseline if it is absent |
//! | `hstats baseline rebuild` | Refetch the corpus and replace the baseline |
//! | `hstats completions <SHELL>` | Print shell completions |
//!
//! `<FILE>` may be `-` to read from stdin. Set `RUST_LOG` to adjust log
//! verbosity (default `healthstats=info`); logs are written to stderr.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use healthstats::{commands, config, server};

/// HealthStats: lexical statistics for biomedical text, compared against a
/// PubMed abstract baseline.
#[derive(Parser)]
#[command(name = "hstats", version)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/hstats.toml`. Built-in defaults are used when
    /// the file does not exist.
    #[arg(long, global = true, default_value = "./config/hstats.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server.
    ///
    /// Binds to `[server].bind` and serves `POST /compareStatistics`.
    Serve,

    /// Print the statistics of one document. Does not touch the baseline.
    Stats {
        /// Document path, or `-` for stdin.
        input: PathBuf,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Compare one document against the baseline.
    ///
    /// Builds the baseline from the reference corpus first if it has never
    /// been persisted.
    Compare {
        /// Document path, or `-` for stdin.
        input: PathBuf,

        /// Print the full response as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Inspect or (re)build the persisted baseline.
    Baseline {
        #[command(subcommand)]
        action: BaselineAction,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum BaselineAction {
    /// Show the persisted baseline and when it was built.
    Show,
    /// Build the baseline if it does not exist yet.
    Build,
    /// Refetch the reference corpus and overwrite the baseline.
    Rebuild,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("healthstats=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config is only loaded by commands that need the baseline
    let load_config = || config::load_config_or_default(&cli.config);

    match cli.command {
        Commands::Stats { input, json } => {
            commands::run_stats(&input, json)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "hstats", &mut std::io::stdout());
        }
        Commands::Serve => {
            server::run_server(&load_config()?).await?;
        }
        Commands::Compare { input, json } => {
            commands::run_compare(&load_config()?, &input, json).await?;
        }
        Commands::Baseline { action } => {
            let cfg = load_config()?;
            match action {
                BaselineAction::Show => commands::run_baseline_show(&cfg).await?,
                BaselineAction::Build => commands::run_baseline_build(&cfg).await?,
                BaselineAction::Rebuild => commands::run_baseline_rebuild(&cfg).await?,
            }
        }
    }

    Ok(())
}
