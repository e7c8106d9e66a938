//! Config CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::storage::{Config, LOCAL_CONFIG_FILE};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default decklog.toml in the current directory
    Init,
}

pub fn run(cmd: ConfigCommands, output: &Output, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(output, config),
        ConfigCommands::Init => init(output),
    }
}

fn show(output: &Output, config: &Config) -> Result<()> {
    if output.is_json() {
        output.data(config);
        return Ok(());
    }

    let global = Config::global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unavailable)".to_string());

    println!("Configuration");
    println!("{}", "=".repeat(40));
    println!("Log file:      {}", config.log_path.display());
    println!("API base URL:  {}", config.api.base_url);
    println!("Timeout:       {}s", config.api.timeout_secs);
    println!("Page delay:    {}ms", config.api.page_delay_ms);
    println!("User agent:    {}", config.api.user_agent);
    println!("Stats top:     {}", config.stats.top);
    println!();
    println!("Local config:  ./{}", LOCAL_CONFIG_FILE);
    println!("Global config: {}", global);

    Ok(())
}

fn init(output: &Output) -> Result<()> {
    let path = std::env::current_dir()?.join(LOCAL_CONFIG_FILE);

    if path.exists() {
        output.verbose_ctx("config", &format!("{} already exists", path.display()));
        output.success(&format!("Config already exists at {}", path.display()));
        return Ok(());
    }

    Config::default().save(&path)?;
    output.success(&format!("Wrote default config to {}", path.display()));

    Ok(())
}
