//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{catalog_cmd, config_cmd, resolve_cmd, stats_cmd};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "decklog")]
#[command(author, version, about = "Resolve MTG Arena decklists against Scryfall and tabulate them")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Decklist log file (overrides config)
    #[arg(long, global = true, env = "DECKLOG_LOG")]
    pub log: Option<PathBuf>,

    /// Card catalog API base URL (overrides config)
    #[arg(long, global = true, env = "DECKLOG_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a decklist and append it to the log
    Resolve {
        /// Decklist file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Resolve and print without writing to the log
        #[arg(long)]
        dry_run: bool,
    },

    /// List every card of a set
    Catalog {
        /// Set code, e.g. ELD
        set: String,
    },

    /// Look up a card by set and collector number
    Card {
        /// Set code, e.g. ELD
        set: String,

        /// Collector number, e.g. 17
        number: String,
    },

    /// Tabulate card, colour and set counts from the log
    Stats {
        /// Rows per top-cards table (overrides config)
        #[arg(long)]
        top: Option<usize>,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(config_cmd::ConfigCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("decklog starting");

    let mut config = Config::load()?;
    if let Some(log) = cli.log {
        config.log_path = log;
    }
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    config.validate()?;

    output.verbose_ctx(
        "config",
        &format!(
            "Log: {}, API: {}",
            config.log_path.display(),
            config.api.base_url
        ),
    );

    match cli.command {
        Commands::Resolve { file, dry_run } => {
            resolve_cmd::run(&output, &config, file.as_deref(), dry_run)?
        }

        Commands::Catalog { set } => catalog_cmd::list(&output, &config, &set)?,

        Commands::Card { set, number } => catalog_cmd::card(&output, &config, &set, &number)?,

        Commands::Stats { top } => {
            let top = top.unwrap_or(config.stats.top);
            if top == 0 {
                anyhow::bail!("--top must be at least 1");
            }
            stats_cmd::run(&output, &config, top)?
        }

        Commands::Config(cmd) => config_cmd::run(cmd, &output, &config)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
