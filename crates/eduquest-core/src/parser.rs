//! TOML game content parser.
//!
//! Loads game definitions from TOML files and directories, and lints them
//! for authoring mistakes. Structural problems (malformed TOML, a correct
//! index pointing outside the choices) are hard errors; style problems are
//! returned as warnings.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, Game, Level};

/// Intermediate TOML structure for parsing game files.
#[derive(Debug, Deserialize)]
struct TomlGameFile {
    game: TomlGameHeader,
    #[serde(default)]
    levels: Vec<TomlLevel>,
}

#[derive(Debug, Deserialize)]
struct TomlGameHeader {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct TomlLevel {
    title: String,
    #[serde(default)]
    instruction: String,
    question: String,
    choices: Vec<String>,
    correct: usize,
    points: u32,
}

/// Parse a single TOML file into a `Game`.
pub fn parse_game(path: &Path) -> Result<Game> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read game file: {}", path.display()))?;

    parse_game_str(&content, path)
}

/// Parse a TOML string into a `Game` (useful for testing).
pub fn parse_game_str(content: &str, source_path: &Path) -> Result<Game> {
    let parsed: TomlGameFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    anyhow::ensure!(
        !parsed.game.id.trim().is_empty(),
        "game id must not be empty: {}",
        source_path.display()
    );
    anyhow::ensure!(
        !parsed.levels.is_empty(),
        "game '{}' has no levels: {}",
        parsed.game.id,
        source_path.display()
    );

    let levels = parsed
        .levels
        .into_iter()
        .map(|l| {
            anyhow::ensure!(
                l.correct < l.choices.len(),
                "level '{}' in game '{}': correct index {} is out of range for {} choices",
                l.title,
                parsed.game.id,
                l.correct,
                l.choices.len()
            );
            Ok(Level {
                title: l.title,
                instruction: l.instruction,
                question: l.question,
                choices: l.choices,
                correct: l.correct,
                points: l.points,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Game {
        id: parsed.game.id,
        title: parsed.game.title,
        levels,
    })
}

/// Recursively load all `.toml` game files from a directory into a catalog.
///
/// Files that fail to parse are skipped with a logged warning so one broken
/// file does not take the whole catalog down.
pub fn load_catalog_directory(dir: &Path) -> Result<Catalog> {
    let mut games = Vec::new();
    collect_games(dir, &mut games)?;
    games.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(Catalog::new(games))
}

fn collect_games(dir: &Path, games: &mut Vec<Game>) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_games(&path, games)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_game(&path) {
                Ok(game) => games.push(game),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(())
}

/// A warning from content validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The level title (if applicable).
    pub level: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Lint a single game for common authoring issues.
pub fn validate_game(game: &Game) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for level in &game.levels {
        if level.choices.len() < 2 {
            warnings.push(ValidationWarning {
                level: Some(level.title.clone()),
                message: format!("only {} choice(s); a question needs at least 2", level.choices.len()),
            });
        }

        let mut seen = HashSet::new();
        for choice in &level.choices {
            if !seen.insert(choice) {
                warnings.push(ValidationWarning {
                    level: Some(level.title.clone()),
                    message: format!("duplicate choice: {choice:?}"),
                });
            }
        }

        if level.points == 0 {
            warnings.push(ValidationWarning {
                level: Some(level.title.clone()),
                message: "level is worth 0 points".into(),
            });
        }

        if level.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                level: Some(level.title.clone()),
                message: "question is empty".into(),
            });
        }
    }

    warnings
}

/// Lint a whole catalog: per-game warnings plus cross-game id collisions.
pub fn validate_catalog(catalog: &Catalog) -> Vec<(String, ValidationWarning)> {
    let mut warnings = Vec::new();

    let mut seen_ids = HashSet::new();
    for game in catalog.games() {
        if !seen_ids.insert(&game.id) {
            warnings.push((
                game.id.clone(),
                ValidationWarning {
                    level: None,
                    message: format!("duplicate game id: {}", game.id),
                },
            ));
        }
        for w in validate_game(game) {
            warnings.push((game.id.clone(), w));
        }
    }

    warnings
}
