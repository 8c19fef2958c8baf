//! The `eduquest games` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(content: PathBuf, data_dir: Option<PathBuf>) -> Result<()> {
    let catalog = super::load_catalog(&content)?;
    let mut engine = super::open_engine(data_dir)?;
    engine.initialize_defaults(&catalog)?;

    let mut table = Table::new();
    table.set_header(vec!["Game", "Title", "Progress", "Score"]);

    for game in catalog.games() {
        let summary = engine.game_summary(game);
        table.add_row(vec![
            Cell::new(&game.id),
            Cell::new(&game.title),
            Cell::new(format!("{}/{}", summary.unlocked, summary.total_levels)),
            Cell::new(summary.score),
        ]);
    }

    println!("{table}");
    Ok(())
}
