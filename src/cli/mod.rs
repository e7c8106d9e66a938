//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `resolve [FILE]` | Resolve a decklist and append it to the log |
//! | `catalog <SET>` | List a set's cards |
//! | `card <SET> <NUMBER>` | Look up a card by collector number |
//! | `stats` | Top cards, colour and set distributions from the log |
//! | `config show`, `config init` | Inspect or create configuration |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! decklog --verbose resolve deck.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod resolve_cmd;
mod catalog_cmd;
mod stats_cmd;
mod config_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
