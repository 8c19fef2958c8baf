//! Core data model types for eduquest.
//!
//! These are the fundamental types the entire eduquest system uses to
//! represent games, levels, and the player profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single multiple-choice level inside a game.
///
/// Levels are static content: authored once, validated at load time, and
/// never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Display title (e.g. "Level 1 - Number Sequence").
    pub title: String,
    /// Instruction text shown above the question.
    #[serde(default)]
    pub instruction: String,
    /// The question itself.
    pub question: String,
    /// Ordered answer choices.
    pub choices: Vec<String>,
    /// 0-based index of the correct choice.
    pub correct: usize,
    /// Points awarded for a correct answer.
    pub points: u32,
}

/// A game: an identifier, a title, and an ordered sequence of levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Unique identifier (e.g. "logic-quest").
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Levels in play order.
    pub levels: Vec<Level>,
}

impl Game {
    /// Number of levels in this game.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}

/// The full set of games available to play.
///
/// The catalog is an input to the engine; the engine never loads or owns
/// content itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Look up a game by id.
    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Games in catalog order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// The player's self-reported identity data, independent of game progress.
///
/// Serialized field names match the persisted record layout
/// (`name`/`school`/`type`/`email`/`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Required display name, never empty.
    pub name: String,
    /// School or class, empty when not provided.
    #[serde(default)]
    pub school: String,
    /// Player category as a free string (e.g. "student", "teacher").
    #[serde(rename = "type", default = "default_player_type")]
    pub player_type: String,
    /// Contact email, empty when not provided.
    #[serde(default)]
    pub email: String,
    /// Set once at first save and preserved across updates.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

pub(crate) fn default_player_type() -> String {
    "general".to_string()
}

/// Unvalidated profile input collected from the UI layer.
///
/// [`crate::engine::ProgressEngine::save_profile`] trims and normalizes a
/// draft into a [`PlayerProfile`], rejecting drafts without a name.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub school: Option<String>,
    pub player_type: Option<String>,
    pub email: Option<String>,
}
