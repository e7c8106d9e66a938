//! decklog - MTG Arena decklist resolution and statistics
//!
//! Parses pasted decklists, resolves each card against its set's catalog
//! (fetched from the Scryfall search API), and appends annotated records to
//! an append-only log that can be tabulated later.

pub mod domain;
pub mod catalog;
pub mod resolver;
pub mod storage;
pub mod cli;

pub use catalog::{CatalogCache, CatalogProvider, FetchError, ScryfallProvider};
pub use domain::{CardRecord, Color, ColorIdentity, DeckLine, DeckRecord, SetCatalog};
pub use resolver::{resolve, resolve_into_log, ResolveError, ResolvedCard};
