//! Catalog commands (catalog, card)

use anyhow::Result;

use super::output::{truncate, Output};
use crate::catalog::{CatalogCache, ScryfallProvider};
use crate::storage::Config;

/// List every card of a set
pub fn list(output: &Output, config: &Config, set: &str) -> Result<()> {
    let mut cache = CatalogCache::new(ScryfallProvider::new(&config.api)?);
    output.verbose_ctx("catalog", &format!("Fetching catalog for set {}", set));

    let catalog = cache.get_or_fetch(set)?;
    output.verbose_ctx("catalog", &format!("Fetched {} cards", catalog.len()));

    if output.is_json() {
        let items: Vec<_> = catalog
            .iter()
            .map(|card| {
                serde_json::json!({
                    "name": card.name,
                    "collector_number": card.collector_number,
                    "colors": card.color_identity.code(),
                    "type_line": card.type_line,
                })
            })
            .collect();
        output.data(&items);
    } else if catalog.is_empty() {
        println!("No cards in set {}.", catalog.set_code().to_ascii_uppercase());
    } else {
        println!("{:<6} {:<36} {:<6} TYPE", "NO.", "NAME", "COLORS");
        println!("{}", "-".repeat(80));
        for card in catalog.iter() {
            println!(
                "{:<6} {:<36} {:<6} {}",
                card.collector_number,
                truncate(&card.name, 36),
                card.color_identity.code(),
                card.type_line
            );
        }
        println!();
        println!("{} card(s) in {}", catalog.len(), catalog.set_code().to_ascii_uppercase());
    }

    Ok(())
}

/// Look up a card by collector number
pub fn card(output: &Output, config: &Config, set: &str, number: &str) -> Result<()> {
    let mut cache = CatalogCache::new(ScryfallProvider::new(&config.api)?);
    output.verbose_ctx("card", &format!("Fetching catalog for set {}", set));

    let catalog = cache.get_or_fetch(set)?;
    let card = catalog.by_collector_number(number).ok_or_else(|| {
        anyhow::anyhow!(
            "No card with collector number {} in set {}",
            number,
            catalog.set_code().to_ascii_uppercase()
        )
    })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": card.name,
            "collector_number": card.collector_number,
            "colors": card.color_identity.code(),
            "type_line": card.type_line,
            "oracle_text": card.oracle_text,
        }));
    } else {
        println!("{}", card.name);
        println!("{}", "=".repeat(40));
        println!(
            "Set:       {} #{}",
            catalog.set_code().to_ascii_uppercase(),
            card.collector_number
        );
        println!("Colors:    {}", card.color_identity.code());
        println!("Type:      {}", card.type_line);
        println!();
        println!("{}", card.oracle_text);
    }

    Ok(())
}
