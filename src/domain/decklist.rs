//! Decklist parsing
//!
//! Parses an MTG Arena style export:
//!
//! ```text
//! 4 Glass Casket (ELD) 17
//! 2 Bonecrusher Giant (ELD) 115
//!
//! Sideboard
//! 1 Mystical Dispute (ELD) 58
//! ```
//!
//! Each kept line becomes a [`DeckLine`]. Parsing is pure; catalog lookups
//! happen in the resolver.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Section marker dropped from the input
pub const SIDEBOARD_MARKER: &str = "Sideboard";

#[derive(Debug, Error, PartialEq)]
pub enum DeckParseError {
    #[error("Line {line_no}: no parenthesised set code in '{line}'")]
    MissingSetCode { line_no: usize, line: String },

    #[error("Line {line_no}: invalid quantity '{quantity}'")]
    InvalidQuantity { line_no: usize, quantity: String },

    #[error("Line {line_no}: missing card name in '{line}'")]
    MissingName { line_no: usize, line: String },
}

/// One parsed decklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckLine {
    pub quantity: u32,
    /// Everything after the quantity, e.g. `Glass Casket (ELD) 17`
    pub raw_name: String,
    /// Card name as written, ending before the first parenthesised token
    pub name: String,
    /// Set code exactly as written, e.g. `ELD`
    pub set_code: String,
    /// Collector number following the set code, if present
    pub collector_number: Option<String>,
}

impl DeckLine {
    /// Name used for catalog lookup
    pub fn candidate_name(&self) -> &str {
        &self.name
    }

    /// Set code normalised for catalog keys
    pub fn set_key(&self) -> String {
        self.set_code.to_ascii_lowercase()
    }
}

fn second_section_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^ [0-9] ").expect("valid regex"))
}

fn set_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\((?P<set>[^()\s]+)\)\s*(?P<number>[^()\s]+)?\s*$").expect("valid regex")
    })
}

/// Returns the part of the input before a second section
///
/// Some exports repeat the list after a line starting with `" <digit> "`;
/// everything from that line on is discarded.
pub fn primary_section(raw: &str) -> &str {
    match second_section_pattern().find(raw) {
        Some(m) => &raw[..m.start()],
        None => raw,
    }
}

/// Returns true for lines that carry no card
pub fn is_skipped(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line == SIDEBOARD_MARKER
}

/// Parses one non-skipped line; `line_no` is 1-based and only used in errors
pub fn parse_line(line_no: usize, line: &str) -> Result<DeckLine, DeckParseError> {
    let line = line.trim();

    let (quantity, rest) = match line.split_once(char::is_whitespace) {
        Some((qty, rest)) => (qty, rest.trim()),
        None => (line, ""),
    };

    let quantity: u32 = quantity
        .parse()
        .map_err(|_| DeckParseError::InvalidQuantity {
            line_no,
            quantity: quantity.to_string(),
        })?;

    if rest.is_empty() {
        return Err(DeckParseError::MissingName {
            line_no,
            line: line.to_string(),
        });
    }

    let caps = set_code_pattern()
        .captures(rest)
        .ok_or_else(|| DeckParseError::MissingSetCode {
            line_no,
            line: line.to_string(),
        })?;

    // The set code may follow the name without a space, as in `Opt(ELD) 59`
    let before_set = rest[..caps.get(0).map_or(0, |m| m.start())].trim_end();
    let name = match before_set.find(" (") {
        Some(idx) => &before_set[..idx],
        None => before_set,
    }
    .trim();

    if name.is_empty() {
        return Err(DeckParseError::MissingName {
            line_no,
            line: line.to_string(),
        });
    }

    Ok(DeckLine {
        quantity,
        raw_name: rest.to_string(),
        name: name.to_string(),
        set_code: caps["set"].to_string(),
        collector_number: caps.name("number").map(|m| m.as_str().to_string()),
    })
}

/// Parses a whole decklist, preserving input order
pub fn parse_decklist(raw: &str) -> Result<Vec<DeckLine>, DeckParseError> {
    primary_section(raw)
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}
