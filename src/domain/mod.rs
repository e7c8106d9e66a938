//! Domain models for decklog
//!
//! Contains the card, decklist and statistics logic without any I/O concerns.

mod color;
mod card;
mod decklist;
mod record;
mod stats;

pub use color::{Color, ColorError, ColorIdentity};
pub use card::{CardRecord, SetCatalog, FACE_SEPARATOR};
pub use decklist::{
    is_skipped, parse_decklist, parse_line, primary_section, DeckLine, DeckParseError,
    SIDEBOARD_MARKER,
};
pub use record::{DeckRecord, RecordError, FIELD_SEPARATOR, MAIN_BOARD, SECTION_SEPARATOR};
pub use stats::{CardCount, DeckStats, TABULATED_COLORS};
