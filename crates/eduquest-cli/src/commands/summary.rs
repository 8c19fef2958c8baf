//! The `eduquest summary` command: the full progress panel.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(content: PathBuf, data_dir: Option<PathBuf>) -> Result<()> {
    let catalog = super::load_catalog(&content)?;
    let mut engine = super::open_engine(data_dir)?;
    engine.initialize_defaults(&catalog)?;

    match engine.profile() {
        Some(p) => println!("Player: {}", p.name),
        None => println!("Player: Guest"),
    }

    let mut table = Table::new();
    table.set_header(vec!["Game", "Score", "Unlocked"]);
    for game in catalog.games() {
        let summary = engine.game_summary(game);
        table.add_row(vec![
            Cell::new(&game.title),
            Cell::new(summary.score),
            Cell::new(format!("{}/{}", summary.unlocked, summary.total_levels)),
        ]);
    }
    println!("{table}");

    println!("Total score: {}", engine.total_score());
    if engine.badges().is_empty() {
        println!("Badges: none yet");
    } else {
        println!("Badges: {}", engine.badges().join(", "));
    }

    Ok(())
}
