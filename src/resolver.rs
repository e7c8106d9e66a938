//! Decklist resolution
//!
//! Matches each parsed decklist line against its set's catalog and produces
//! one [`ResolvedCard`] per line, in input order.
//!
//! Resolution is all-or-nothing: every line is parsed before any catalog is
//! fetched, and the log is only written once every card has resolved.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{CatalogCache, CatalogProvider, FetchError};
use crate::domain::{parse_decklist, CardRecord, DeckLine, DeckParseError, DeckRecord, MAIN_BOARD};
use crate::storage::DeckLog;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] DeckParseError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("No card matching '{name}' in set {set_code}")]
    CardNotFound { name: String, set_code: String },
}

/// A decklist line matched to its catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCard {
    pub line: DeckLine,
    pub card: CardRecord,
}

impl ResolvedCard {
    /// Colour identity sorted by precedence, e.g. `WU`
    pub fn colors(&self) -> String {
        self.card.color_identity.code()
    }

    /// The log record for this card
    pub fn to_record(&self) -> DeckRecord {
        DeckRecord {
            quantity: self.line.quantity,
            name: self.card.name.clone(),
            board: MAIN_BOARD.to_string(),
            colors: self.colors(),
            set_code: self.line.set_code.clone(),
            type_line: self.card.type_line.clone(),
            oracle_text: self.card.oracle_text.clone(),
        }
    }
}

/// Resolves every card of a raw decklist, fetching missing sets through `cache`
pub fn resolve<P: CatalogProvider>(
    raw: &str,
    cache: &mut CatalogCache<P>,
) -> Result<Vec<ResolvedCard>, ResolveError> {
    let lines = parse_decklist(raw)?;

    for line in &lines {
        cache.get_or_fetch(&line.set_code)?;
    }

    lines
        .into_iter()
        .map(|line| -> Result<ResolvedCard, ResolveError> {
            let catalog = cache.get_or_fetch(&line.set_code)?;
            let candidate = line.candidate_name();

            let card = catalog
                .find_containing(candidate)
                .cloned()
                .ok_or_else(|| ResolveError::CardNotFound {
                    name: candidate.to_string(),
                    set_code: line.set_code.clone(),
                })?;

            Ok(ResolvedCard { line, card })
        })
        .collect()
}

/// Resolves a decklist and appends it to `log` as one section
///
/// Nothing is written unless every line resolves.
pub fn resolve_into_log<P: CatalogProvider>(
    raw: &str,
    cache: &mut CatalogCache<P>,
    log: &DeckLog,
) -> anyhow::Result<Vec<ResolvedCard>> {
    let resolved = resolve(raw, cache)?;
    let records: Vec<DeckRecord> = resolved.iter().map(ResolvedCard::to_record).collect();
    log.append_section(&records)?;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::StaticProvider;
    use std::fs;
    use tempfile::TempDir;

    fn page(cards: serde_json::Value) -> String {
        serde_json::json!({ "has_more": false, "data": cards }).to_string()
    }

    fn provider() -> StaticProvider {
        StaticProvider::new()
            .with_page(
                "eld",
                1,
                page(serde_json::json!([
                    {
                        "name": "Glass Casket",
                        "collector_number": "17",
                        "color_identity": [],
                        "type_line": "Artifact",
                        "oracle_text": "Exile target creature."
                    },
                    {
                        "name": "Bonecrusher Giant // Stomp",
                        "collector_number": "115",
                        "color_identity": ["R"],
                        "type_line": "Creature — Giant // Instant — Adventure",
                        "card_faces": [
                            { "oracle_text": "Face1" },
                            { "oracle_text": "Face2" }
                        ]
                    },
                    {
                        "name": "Fabled Passage",
                        "collector_number": "244",
                        "color_identity": [],
                        "type_line": "Land",
                        "oracle_text": "Search your library for a basic land card."
                    }
                ])),
            )
            .with_page(
                "rna",
                1,
                page(serde_json::json!([
                    {
                        "name": "Dovin's Acuity",
                        "collector_number": "157",
                        "color_identity": ["U", "W"],
                        "type_line": "Enchantment",
                        "oracle_text": "Draw a card."
                    }
                ])),
            )
    }

    #[test]
    fn artifact_resolves_to_a() {
        let mut cache = CatalogCache::new(provider());
        let resolved = resolve("4 Glass Casket (ELD) 17", &mut cache).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].colors(), "A");
        assert_eq!(resolved[0].line.quantity, 4);
    }

    #[test]
    fn records_follow_input_order() {
        let mut cache = CatalogCache::new(provider());
        let raw = "2 Dovin's Acuity (RNA) 157\n4 Bonecrusher Giant (ELD) 115\n\nSideboard\n1 Fabled Passage (ELD) 244\n";

        let resolved = resolve(raw, &mut cache).unwrap();
        let names: Vec<_> = resolved.iter().map(|r| r.card.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Dovin's Acuity", "Bonecrusher Giant // Stomp", "Fabled Passage"]
        );
        assert_eq!(resolved[0].colors(), "WU");
        assert_eq!(resolved[1].card.oracle_text, "Face1 // Face2");
        assert_eq!(resolved[2].colors(), "");
    }

    #[test]
    fn each_set_is_fetched_once() {
        let mut cache = CatalogCache::new(provider());
        let raw = "1 Glass Casket (ELD) 17\n1 Fabled Passage (eld) 244\n1 Dovin's Acuity (RNA) 157";

        resolve(raw, &mut cache).unwrap();
        resolve(raw, &mut cache).unwrap();

        let calls = cache.provider().calls();
        assert_eq!(calls, vec![("eld".to_string(), 1), ("rna".to_string(), 1)]);
    }

    #[test]
    fn record_keeps_set_code_as_written() {
        let mut cache = CatalogCache::new(provider());
        let resolved = resolve("1 Fabled Passage (eld) 244", &mut cache).unwrap();

        let record = resolved[0].to_record();
        assert_eq!(record.set_code, "eld");
        assert_eq!(record.board, "main");
        assert_eq!(
            record.to_line(),
            "1;Fabled Passage;main;;eld;Land;Search your library for a basic land card."
        );
    }

    #[test]
    fn unknown_card_is_an_error() {
        let mut cache = CatalogCache::new(provider());
        let err = resolve("4 Opt (ELD) 59", &mut cache).unwrap_err();

        assert!(matches!(
            err,
            ResolveError::CardNotFound { ref name, ref set_code } if name == "Opt" && set_code == "ELD"
        ));
    }

    #[test]
    fn parse_error_happens_before_any_fetch() {
        let mut cache = CatalogCache::new(provider());
        let err = resolve("4 Glass Casket (ELD) 17\n4 Opt", &mut cache).unwrap_err();

        assert!(matches!(
            err,
            ResolveError::Parse(DeckParseError::MissingSetCode { line_no: 2, .. })
        ));
        assert!(cache.provider().calls().is_empty());
    }

    #[test]
    fn unknown_set_is_a_fetch_error() {
        let mut cache = CatalogCache::new(provider());
        let err = resolve("4 Opt (XLN) 65", &mut cache).unwrap_err();

        assert!(matches!(err, ResolveError::Fetch(FetchError::Status { .. })));
    }

    #[test]
    fn sideboard_only_resolves_to_nothing() {
        let mut cache = CatalogCache::new(provider());
        assert!(resolve("Sideboard\n", &mut cache).unwrap().is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn resolve_into_log_appends_section() {
        let dir = TempDir::new().unwrap();
        let log = DeckLog::new(dir.path().join("decklists.txt"));
        let mut cache = CatalogCache::new(provider());

        resolve_into_log("4 Glass Casket (ELD) 17\n2 Dovin's Acuity (RNA) 157", &mut cache, &log)
            .unwrap();

        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            content,
            "---\n4;Glass Casket;main;A;ELD;Artifact;Exile target creature.\n2;Dovin's Acuity;main;WU;RNA;Enchantment;Draw a card.\n"
        );
    }

    #[test]
    fn failed_resolve_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let log = DeckLog::new(dir.path().join("decklists.txt"));
        let mut cache = CatalogCache::new(provider());

        let result = resolve_into_log("4 Glass Casket (ELD) 17\n1 Opt (ELD) 59", &mut cache, &log);

        assert!(result.is_err());
        assert!(!log.path().exists());
    }

    #[test]
    fn set_code_attached_to_name_resolves() {
        let mut cache = CatalogCache::new(provider());
        let resolved = resolve("4 Glass Casket(ELD) 17", &mut cache).unwrap();

        assert_eq!(resolved[0].card.name, "Glass Casket");
        assert_eq!(resolved[0].line.set_code, "ELD");
    }

    #[test]
    fn huge_quantities_tabulate_without_overflow() {
        let mut cache = CatalogCache::new(provider());
        let raw = "4294967295 Glass Casket (ELD) 17\n1 Glass Casket (ELD) 17";

        let records: Vec<DeckRecord> = resolve(raw, &mut cache)
            .unwrap()
            .iter()
            .map(ResolvedCard::to_record)
            .collect();
        let stats = crate::domain::DeckStats::from_records(&records, 1);

        assert_eq!(stats.total_cards, 4_294_967_296);
        assert_eq!(stats.cards[0].count, 4_294_967_296);
    }
}
