//! Card records and per-set catalogs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::color::ColorIdentity;

/// Separator between the faces of a double-faced card's oracle text
pub const FACE_SEPARATOR: &str = " // ";

/// Metadata for one card as fetched from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    pub collector_number: String,
    pub color_identity: ColorIdentity,
    pub type_line: String,
    pub oracle_text: String,
}

impl CardRecord {
    /// Returns true if the type line marks this card as an artifact
    pub fn is_artifact(&self) -> bool {
        self.type_line.contains("Artifact")
    }
}

/// All cards of one set, keyed by name
///
/// Insertion order is kept so that substring lookups are deterministic:
/// the first card (in catalog order) containing the query wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetCatalog {
    set_code: String,
    cards: Vec<CardRecord>,
    by_name: HashMap<String, usize>,
    by_number: HashMap<String, usize>,
}

impl SetCatalog {
    /// Creates an empty catalog for the given set code
    pub fn new(set_code: impl Into<String>) -> Self {
        Self {
            set_code: set_code.into(),
            ..Self::default()
        }
    }

    pub fn set_code(&self) -> &str {
        &self.set_code
    }

    /// Inserts a card; a card with the same name replaces the earlier record in place
    pub fn insert(&mut self, card: CardRecord) {
        if let Some(&idx) = self.by_name.get(&card.name) {
            let old_number = std::mem::take(&mut self.cards[idx].collector_number);
            self.by_number.remove(&old_number);
            self.by_number.insert(card.collector_number.clone(), idx);
            self.cards[idx] = card;
            return;
        }

        let idx = self.cards.len();
        self.by_name.insert(card.name.clone(), idx);
        self.by_number.insert(card.collector_number.clone(), idx);
        self.cards.push(card);
    }

    /// Looks up a card by its exact name
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.by_name.get(name).map(|&idx| &self.cards[idx])
    }

    /// Looks up a card by its collector number within the set
    pub fn by_collector_number(&self, number: &str) -> Option<&CardRecord> {
        self.by_number.get(number).map(|&idx| &self.cards[idx])
    }

    /// Finds a card whose name contains `candidate`
    ///
    /// An exact name match takes priority; otherwise the first containing
    /// entry in catalog order is returned. Substring collisions are not
    /// disambiguated further.
    pub fn find_containing(&self, candidate: &str) -> Option<&CardRecord> {
        self.get(candidate)
            .or_else(|| self.cards.iter().find(|card| card.name.contains(candidate)))
    }

    /// Iterates over cards in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
