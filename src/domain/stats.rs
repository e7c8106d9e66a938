//! Distribution tables over logged decklists
//!
//! Everything is weighted by quantity: four copies of a card count four times.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::color::Color;
use super::record::DeckRecord;

/// Colours tabulated in [`DeckStats::color_counts`], in display order
pub const TABULATED_COLORS: [Color; 6] = [
    Color::White,
    Color::Blue,
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Artifact,
];

/// Total copies of one card across all logged decks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardCount {
    pub name: String,
    pub colors: String,
    pub count: u64,
}

/// Aggregated counts over a set of log records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeckStats {
    /// Sorted by count descending, then name
    pub cards: Vec<CardCount>,
    /// Copies per colour symbol
    pub color_counts: BTreeMap<Color, u64>,
    /// Copies per upper-cased set code
    pub set_counts: BTreeMap<String, u64>,
    pub total_cards: u64,
    pub sections: usize,
}

impl DeckStats {
    /// Builds the tables from records (and the number of sections they came from)
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a DeckRecord>,
        sections: usize,
    ) -> Self {
        let mut by_card: HashMap<(String, String), u64> = HashMap::new();
        let mut color_counts: BTreeMap<Color, u64> =
            TABULATED_COLORS.iter().map(|&c| (c, 0)).collect();
        let mut set_counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut total_cards: u64 = 0;

        for record in records {
            let quantity = u64::from(record.quantity);

            *by_card
                .entry((record.name.clone(), record.colors.clone()))
                .or_default() += quantity;

            for color in TABULATED_COLORS {
                if record.colors.contains(color.symbol()) {
                    *color_counts.entry(color).or_default() += quantity;
                }
            }

            *set_counts
                .entry(record.set_code.to_ascii_uppercase())
                .or_default() += quantity;

            total_cards += quantity;
        }

        let mut cards: Vec<CardCount> = by_card
            .into_iter()
            .map(|((name, colors), count)| CardCount {
                name,
                colors,
                count,
            })
            .collect();
        cards.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.colors.cmp(&b.colors))
        });

        Self {
            cards,
            color_counts,
            set_counts,
            total_cards,
            sections,
        }
    }

    /// The `n` most played cards overall
    pub fn top(&self, n: usize) -> Vec<&CardCount> {
        self.cards.iter().take(n).collect()
    }

    /// The `n` most played cards whose colour string contains `color`
    pub fn top_for_color(&self, color: Color, n: usize) -> Vec<&CardCount> {
        self.cards
            .iter()
            .filter(|card| card.colors.contains(color.symbol()))
            .take(n)
            .collect()
    }

    /// Copies counted for one colour
    pub fn color_count(&self, color: Color) -> u64 {
        self.color_counts.get(&color).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(quantity: u32, name: &str, colors: &str, set_code: &str) -> DeckRecord {
        DeckRecord {
            quantity,
            name: name.to_string(),
            board: "main".to_string(),
            colors: colors.to_string(),
            set_code: set_code.to_string(),
            type_line: String::new(),
            oracle_text: String::new(),
        }
    }

    #[test]
    fn empty_log() {
        let records: Vec<DeckRecord> = Vec::new();
        let stats = DeckStats::from_records(&records, 0);
        assert!(stats.cards.is_empty());
        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.color_count(Color::White), 0);
        assert_eq!(stats.color_counts.len(), 6);
    }

    #[test]
    fn card_counts_sum_across_decks() {
        let records = vec![
            rec(4, "Opt", "U", "ELD"),
            rec(2, "Glass Casket", "A", "ELD"),
            rec(3, "Opt", "U", "eld"),
        ];
        let stats = DeckStats::from_records(&records, 2);

        assert_eq!(stats.sections, 2);
        assert_eq!(stats.total_cards, 9);
        assert_eq!(stats.top(1)[0].name, "Opt");
        assert_eq!(stats.top(1)[0].count, 7);
        assert_eq!(stats.set_counts.get("ELD"), Some(&9));
    }

    #[test]
    fn multicolor_counts_toward_each_color() {
        let records = vec![rec(4, "Dovin's Acuity", "WU", "RNA"), rec(1, "Forest", "", "ELD")];
        let stats = DeckStats::from_records(&records, 1);

        assert_eq!(stats.color_count(Color::White), 4);
        assert_eq!(stats.color_count(Color::Blue), 4);
        assert_eq!(stats.color_count(Color::Green), 0);
        assert_eq!(stats.total_cards, 5);
    }

    #[test]
    fn top_for_color_filters_and_limits() {
        let records = vec![
            rec(4, "Opt", "U", "ELD"),
            rec(3, "Brazen Borrower", "U", "ELD"),
            rec(2, "Dovin's Acuity", "WU", "RNA"),
            rec(4, "Giant Killer", "W", "ELD"),
        ];
        let stats = DeckStats::from_records(&records, 1);

        let blue: Vec<_> = stats
            .top_for_color(Color::Blue, 2)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(blue, vec!["Opt", "Brazen Borrower"]);

        let white: Vec<_> = stats
            .top_for_color(Color::White, 5)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(white, vec!["Giant Killer", "Dovin's Acuity"]);
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let records = vec![rec(2, "Opt", "U", "ELD"), rec(2, "Flood of Tears", "U", "M20")];
        let stats = DeckStats::from_records(&records, 1);
        assert_eq!(stats.cards[0].name, "Flood of Tears");
    }

    #[test]
    fn totals_past_u32_do_not_wrap() {
        let records = vec![
            rec(u32::MAX, "Opt", "U", "ELD"),
            rec(1, "Opt", "U", "ELD"),
        ];
        let stats = DeckStats::from_records(&records, 1);

        let expected = u64::from(u32::MAX) + 1;
        assert_eq!(stats.total_cards, expected);
        assert_eq!(stats.cards[0].count, expected);
        assert_eq!(stats.color_count(Color::Blue), expected);
        assert_eq!(stats.set_counts.get("ELD"), Some(&expected));
    }
}
