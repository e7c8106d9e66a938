//! Stats command
//!
//! Reads the decklist log back and prints top-card tables plus colour and
//! set distributions.

use anyhow::Result;

use super::output::{truncate, Output};
use crate::domain::{CardCount, Color, DeckStats, TABULATED_COLORS};
use crate::storage::{Config, DeckLog};

fn print_table(title: &str, rows: &[&CardCount]) {
    println!("{}", title);
    if rows.is_empty() {
        println!("  (none)");
        return;
    }
    for row in rows {
        println!(
            "  {:>4}  {:<36} {}",
            row.count,
            truncate(&row.name, 36),
            row.colors
        );
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

pub fn run(output: &Output, config: &Config, top: usize) -> Result<()> {
    let log = DeckLog::new(&config.log_path);
    output.verbose_ctx("stats", &format!("Reading {}", log.path().display()));

    let sections = log.read_sections()?;
    let stats = DeckStats::from_records(sections.iter().flatten(), sections.len());
    output.verbose_ctx(
        "stats",
        &format!(
            "{} sections, {} distinct cards",
            stats.sections,
            stats.cards.len()
        ),
    );

    if output.is_json() {
        let by_color: serde_json::Map<String, serde_json::Value> = Color::WUBRG
            .iter()
            .map(|&color| {
                (
                    color.to_string(),
                    serde_json::json!(stats.top_for_color(color, top)),
                )
            })
            .collect();

        output.data(&serde_json::json!({
            "decks": stats.sections,
            "total_cards": stats.total_cards,
            "top": stats.top(top),
            "top_by_color": by_color,
            "colors": stats.color_counts,
            "sets": stats.set_counts,
        }));
        return Ok(());
    }

    if stats.sections == 0 {
        println!("No decklists logged in {}.", log.path().display());
        return Ok(());
    }

    println!(
        "Decklist Stats ({} decks, {} cards)",
        stats.sections, stats.total_cards
    );
    println!("{}", "=".repeat(50));
    println!();

    print_table(&format!("Top {} overall:", top), &stats.top(top));
    for color in Color::WUBRG {
        println!();
        print_table(
            &format!("Top {} containing {}:", top, color),
            &stats.top_for_color(color, top),
        );
    }

    println!();
    println!("Colors:");
    for color in TABULATED_COLORS {
        let count = stats.color_count(color);
        println!(
            "  {}  {:>5}  {:>5.1}%",
            color,
            count,
            percent(count, stats.total_cards)
        );
    }

    println!();
    println!("Sets:");
    for (set, count) in &stats.set_counts {
        println!(
            "  {:<6} {:>5}  {:>5.1}%",
            set,
            count,
            percent(*count, stats.total_cards)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_zero_total() {
        assert_eq!(percent(3, 0), 0.0);
    }

    #[test]
    fn percent_of_total() {
        assert!((percent(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
