//! Resolve command
//!
//! Reads a pasted decklist, resolves every card and appends the result to
//! the decklist log.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::{truncate, Output};
use crate::catalog::{CatalogCache, ScryfallProvider};
use crate::domain::{parse_decklist, DeckRecord};
use crate::resolver::{resolve, resolve_into_log, ResolvedCard};
use crate::storage::{Config, DeckLog};

/// Reads the decklist from a file, or stdin for `None` / `-`
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read decklist: {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read decklist from stdin")?;
            Ok(raw)
        }
    }
}

/// Sum of quantities, widened so large decklists cannot overflow
fn total_quantity(records: &[DeckRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.quantity)).sum()
}

pub fn run(output: &Output, config: &Config, file: Option<&Path>, dry_run: bool) -> Result<()> {
    let raw = read_input(file)?;

    // Parse up front so a bad line fails before any network traffic
    let lines = parse_decklist(&raw)?;
    output.verbose_ctx("resolve", &format!("Parsed {} decklist lines", lines.len()));

    let mut cache = CatalogCache::new(ScryfallProvider::new(&config.api)?);

    let sets: BTreeSet<String> = lines.iter().map(|line| line.set_key()).collect();
    for set in &sets {
        output.verbose_ctx("resolve", &format!("Fetching catalog for set {}", set));
        let catalog = cache.get_or_fetch(set)?;
        output.verbose_ctx(
            "resolve",
            &format!("Set {} has {} cards", set, catalog.len()),
        );
    }
    output.verbose_ctx("resolve", &format!("{} set catalog(s) cached", cache.len()));

    let resolved = if dry_run {
        resolve(&raw, &mut cache)?
    } else {
        let log = DeckLog::new(&config.log_path);
        let resolved = resolve_into_log(&raw, &mut cache, &log)?;
        output.verbose_ctx(
            "resolve",
            &format!("Appended section to {}", log.path().display()),
        );
        resolved
    };

    let records: Vec<DeckRecord> = resolved.iter().map(ResolvedCard::to_record).collect();

    if output.is_json() {
        output.data(&serde_json::json!({
            "records": records,
            "appended": !dry_run,
            "log": config.log_path.display().to_string(),
        }));
        return Ok(());
    }

    if records.is_empty() {
        println!("No cards in decklist.");
    } else {
        println!("{:<4} {:<32} {:<6} {:<6} TYPE", "QTY", "NAME", "COLORS", "SET");
        println!("{}", "-".repeat(80));
        for record in &records {
            println!(
                "{:<4} {:<32} {:<6} {:<6} {}",
                record.quantity,
                truncate(&record.name, 32),
                record.colors,
                record.set_code,
                record.type_line
            );
        }
        println!();
    }

    let total = total_quantity(&records);
    if dry_run {
        output.success(&format!(
            "Resolved {} entries ({} cards), log not written",
            records.len(),
            total
        ));
    } else {
        output.success(&format!(
            "Appended {} entries ({} cards) to {}",
            records.len(),
            total,
            config.log_path.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAIN_BOARD;

    fn record(quantity: u32) -> DeckRecord {
        DeckRecord {
            quantity,
            name: "Opt".to_string(),
            board: MAIN_BOARD.to_string(),
            colors: "U".to_string(),
            set_code: "ELD".to_string(),
            type_line: "Instant".to_string(),
            oracle_text: "Scry 1.".to_string(),
        }
    }

    #[test]
    fn total_quantity_of_nothing() {
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn total_quantity_past_u32() {
        let records = vec![record(u32::MAX), record(1)];
        assert_eq!(total_quantity(&records), u64::from(u32::MAX) + 1);
    }
}
