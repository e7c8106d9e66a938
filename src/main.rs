//! decklog - Resolve MTG Arena decklists and tabulate them

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = decklog::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
