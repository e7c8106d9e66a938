//! Log record format
//!
//! One record per decklist entry, one line per record:
//!
//! ```text
//! qty;name;main;colors;set_code;type_line;oracle_text
//! ```
//!
//! Field values never contain `;` or line breaks: `;` is written as `,`
//! and line breaks as the two characters `\n`, so every record splits into
//! exactly seven fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::ColorIdentity;

/// Field separator within a record
pub const FIELD_SEPARATOR: char = ';';

/// Line that opens each appended section
pub const SECTION_SEPARATOR: &str = "---";

/// Board tag written for every resolved card
pub const MAIN_BOARD: &str = "main";

const FIELD_COUNT: usize = 7;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("expected 7 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    #[error("invalid colour identity '{0}'")]
    InvalidColors(String),
}

/// A single log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    pub quantity: u32,
    pub name: String,
    pub board: String,
    pub colors: String,
    pub set_code: String,
    pub type_line: String,
    pub oracle_text: String,
}

/// Makes a value safe to embed as a single field
fn encode_field(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
        .replace(FIELD_SEPARATOR, ",")
}

impl DeckRecord {
    /// Serialises to a single line (without trailing newline)
    pub fn to_line(&self) -> String {
        let fields = [
            self.quantity.to_string(),
            encode_field(&self.name),
            encode_field(&self.board),
            encode_field(&self.colors),
            encode_field(&self.set_code),
            encode_field(&self.type_line),
            encode_field(&self.oracle_text),
        ];
        fields.join(&FIELD_SEPARATOR.to_string())
    }

    /// Parses a line written by [`DeckRecord::to_line`]
    ///
    /// Encoded line breaks in the oracle text are left as written.
    pub fn parse_line(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(RecordError::FieldCount(fields.len()));
        }

        let quantity = fields[0]
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidQuantity(fields[0].to_string()))?;

        ColorIdentity::from_code(fields[3])
            .map_err(|_| RecordError::InvalidColors(fields[3].to_string()))?;

        Ok(Self {
            quantity,
            name: fields[1].to_string(),
            board: fields[2].to_string(),
            colors: fields[3].to_string(),
            set_code: fields[4].to_string(),
            type_line: fields[5].to_string(),
            oracle_text: fields[6].to_string(),
        })
    }
}
