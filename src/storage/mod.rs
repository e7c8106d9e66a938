//! # Storage Layer
//!
//! Persistence for decklog: configuration and the decklist log.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Decklist log | `;`-separated records, `---` between sections | `decklists.txt` (configurable) |
//! | Config | TOML | `./decklog.toml` or `~/.config/decklog/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`DeckLog`] uses file locking (`fs2`): exclusive for appends, shared for reads
//! - The log is append-only; nothing ever truncates or rewrites it
//!
//! ## Key Types
//!
//! - [`DeckLog`] - Append sections to and read them back from the log
//! - [`Config`] - Log path, catalog API and statistics settings

mod config;
mod decklog;

pub use config::{ApiConfig, Config, ConfigError, StatsConfig, LOCAL_CONFIG_FILE};
pub use decklog::{DeckLog, LogError};
