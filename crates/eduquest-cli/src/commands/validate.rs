//! The `eduquest validate` command.

use std::path::PathBuf;

use anyhow::Result;

use eduquest_core::parser;

pub fn execute(content: PathBuf) -> Result<()> {
    let catalog = super::load_catalog(&content)?;

    for game in catalog.games() {
        println!("Game: {} ({} levels)", game.title, game.levels.len());
    }

    let warnings = parser::validate_catalog(&catalog);
    for (game_id, w) in &warnings {
        let prefix = match &w.level {
            Some(level) => format!("  [{game_id} / {level}]"),
            None => format!("  [{game_id}]"),
        };
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All games valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
