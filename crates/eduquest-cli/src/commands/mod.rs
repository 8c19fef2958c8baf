//! Subcommand implementations and shared wiring.

pub mod answer;
pub mod games;
pub mod init;
pub mod play;
pub mod profile;
pub mod reset;
pub mod summary;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use eduquest_core::engine::{AnswerOutcome, ProgressEngine};
use eduquest_core::model::{Catalog, Game, Level};
use eduquest_core::parser;
use eduquest_store::FileStore;

/// Open the progress engine over the given (or default) data directory.
pub fn open_engine(data_dir: Option<PathBuf>) -> Result<ProgressEngine> {
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::open_default()?,
    };
    Ok(ProgressEngine::open(Box::new(store)))
}

/// Load a catalog from a content directory or a single game file.
pub fn load_catalog(content: &Path) -> Result<Catalog> {
    let catalog = if content.is_dir() {
        parser::load_catalog_directory(content)?
    } else {
        Catalog::new(vec![parser::parse_game(content)?])
    };
    anyhow::ensure!(
        !catalog.is_empty(),
        "no games found in {} (run `eduquest init` to create the starter content)",
        content.display()
    );
    Ok(catalog)
}

/// Look up a game, listing the available ids on failure.
pub fn find_game<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Game> {
    catalog.get(id).with_context(|| {
        let ids: Vec<&str> = catalog.games().iter().map(|g| g.id.as_str()).collect();
        format!("unknown game '{id}'. Available: {}", ids.join(", "))
    })
}

/// Print the outcome of one answered level.
pub fn report_outcome(outcome: &AnswerOutcome, level: &Level) {
    match outcome {
        AnswerOutcome::Correct {
            points_awarded,
            new_score,
            unlocked_level,
        } => {
            println!("Correct! +{points_awarded} points (score: {new_score})");
            if let Some(n) = unlocked_level {
                println!("Level {n} unlocked!");
            }
        }
        AnswerOutcome::Incorrect { correct_index } => {
            println!(
                "Wrong. The correct answer was: {}",
                level.choices[*correct_index]
            );
        }
    }
}
