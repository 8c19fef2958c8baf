//! The progress engine.
//!
//! Tracks per-game unlock state and score, evaluates badge thresholds, and
//! persists every mutation through an injected [`StateStore`]. All
//! operations are synchronous and run to completion on the calling thread.

use serde::Serialize;

use crate::badges::{self, BadgeRule};
use crate::error::{ProfileError, StoreError};
use crate::model::{default_player_type, Catalog, Game, PlayerProfile, ProfileDraft};
use crate::state::EngineState;
use crate::traits::{StateStore, StoreKey};

/// Result of submitting an answer for a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        /// Points the answered level was worth.
        points_awarded: u32,
        /// The game's cumulative score after this answer.
        new_score: u32,
        /// 1-based number of the level that just became playable, when this
        /// answer advanced the unlock frontier.
        unlocked_level: Option<u32>,
    },
    Incorrect {
        /// 0-based index of the choice that would have been correct.
        correct_index: usize,
    },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct { .. })
    }
}

/// Read-only projection of one game's state for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub unlocked: u32,
    pub total_levels: usize,
    pub score: u32,
}

/// The progress engine.
///
/// Owns the in-memory mirror of the persisted records and the store they
/// round-trip through. Construct with [`ProgressEngine::open`]; content
/// (games, levels) is always passed in by the caller, never owned here.
pub struct ProgressEngine {
    store: Box<dyn StateStore>,
    state: EngineState,
    badge_rules: Vec<BadgeRule>,
}

impl ProgressEngine {
    /// Load engine state from a store.
    ///
    /// Never fails: records that cannot be read or decoded degrade to
    /// defaults with a logged warning (see [`EngineState::load`]).
    pub fn open(store: Box<dyn StateStore>) -> Self {
        let state = EngineState::load(store.as_ref());
        Self {
            store,
            state,
            badge_rules: badges::default_rules(),
        }
    }

    /// Replace the badge rule table (must be ascending by threshold).
    pub fn with_badge_rules(mut self, rules: Vec<BadgeRule>) -> Self {
        self.badge_rules = rules;
        self
    }

    /// Seed defaults for every game in the catalog that has no record yet:
    /// one unlocked level and a zero score.
    ///
    /// Idempotent; existing records are never overwritten. Both records are
    /// persisted even when nothing changed.
    pub fn initialize_defaults(&mut self, catalog: &Catalog) -> Result<(), StoreError> {
        for game in catalog.games() {
            self.state.progress.entry(game.id.clone()).or_default();
            self.state.scores.entry(game.id.clone()).or_insert(0);
        }
        persist(self.store.as_mut(), StoreKey::Progress, &self.state.progress)?;
        persist(self.store.as_mut(), StoreKey::Scores, &self.state.scores)
    }

    /// Record an answer for `game`'s level at `level_index` (0-based).
    ///
    /// On a correct answer the level's points are added to the game's score,
    /// and when the answered level was the unlock frontier and a next level
    /// exists, exactly that next level is unlocked. An incorrect answer
    /// mutates nothing.
    ///
    /// Repeated calls are not deduplicated; the caller submits at most one
    /// answer per rendered question.
    ///
    /// # Panics
    ///
    /// If `level_index` or `chosen_index` is out of range. Those are
    /// programming errors in the calling layer, not user-facing failures.
    pub fn record_answer(
        &mut self,
        game: &Game,
        level_index: usize,
        chosen_index: usize,
    ) -> Result<AnswerOutcome, StoreError> {
        assert!(
            level_index < game.levels.len(),
            "level index {level_index} out of range for game '{}'",
            game.id
        );
        let level = &game.levels[level_index];
        assert!(
            chosen_index < level.choices.len(),
            "choice index {chosen_index} out of range for level '{}'",
            level.title
        );

        if chosen_index != level.correct {
            return Ok(AnswerOutcome::Incorrect {
                correct_index: level.correct,
            });
        }

        let score = self.state.scores.entry(game.id.clone()).or_insert(0);
        *score += level.points;
        let new_score = *score;
        persist(self.store.as_mut(), StoreKey::Scores, &self.state.scores)?;

        let progress = self.state.progress.entry(game.id.clone()).or_default();
        let mut unlocked_level = None;
        if level_index + 1 == progress.unlocked as usize && level_index + 1 < game.levels.len() {
            progress.unlocked = (level_index + 2) as u32;
            unlocked_level = Some(progress.unlocked);
            persist(self.store.as_mut(), StoreKey::Progress, &self.state.progress)?;
        }

        Ok(AnswerOutcome::Correct {
            points_awarded: level.points,
            new_score,
            unlocked_level,
        })
    }

    /// Re-evaluate badge thresholds against the current total score and
    /// return the full badge set.
    ///
    /// Monotonic and idempotent: badges are only appended, and a call with
    /// an unchanged score changes nothing. Multiple thresholds crossed since
    /// the last call are all awarded at once, in rule-table order.
    pub fn evaluate_badges(&mut self) -> Result<&[String], StoreError> {
        let total = self.total_score();
        let new: Vec<String> = badges::newly_earned(&self.badge_rules, &self.state.badges, total)
            .into_iter()
            .map(String::from)
            .collect();
        if !new.is_empty() {
            self.state.badges.extend(new);
            persist(self.store.as_mut(), StoreKey::Badges, &self.state.badges)?;
        }
        Ok(&self.state.badges)
    }

    /// Display projection for one game.
    pub fn game_summary(&self, game: &Game) -> GameSummary {
        GameSummary {
            unlocked: self.unlocked(&game.id),
            total_levels: game.levels.len(),
            score: self.score(&game.id),
        }
    }

    /// Number of unlocked levels for a game (1 when the game has no record).
    pub fn unlocked(&self, game_id: &str) -> u32 {
        self.state
            .progress
            .get(game_id)
            .map(|p| p.unlocked)
            .unwrap_or(1)
    }

    /// Cumulative score for a game (0 when the game has no record).
    pub fn score(&self, game_id: &str) -> u32 {
        self.state.scores.get(game_id).copied().unwrap_or(0)
    }

    /// Total score across all games.
    pub fn total_score(&self) -> u32 {
        self.state.scores.values().sum()
    }

    /// Earned badges in the order they were awarded.
    pub fn badges(&self) -> &[String] {
        &self.state.badges
    }

    pub fn profile(&self) -> Option<&PlayerProfile> {
        self.state.profile.as_ref()
    }

    /// Validate, normalize, and persist a profile draft.
    ///
    /// Fails with [`ProfileError::EmptyName`] when the trimmed name is empty,
    /// leaving any stored profile untouched. On an update, `created_at` from
    /// the existing profile is preserved; on first save it is set to now.
    pub fn save_profile(&mut self, draft: ProfileDraft) -> Result<PlayerProfile, ProfileError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }

        let created_at = self
            .state
            .profile
            .as_ref()
            .map(|p| p.created_at)
            .unwrap_or_else(chrono::Utc::now);
        let profile = PlayerProfile {
            name: name.to_string(),
            school: normalize(draft.school),
            player_type: match normalize(draft.player_type) {
                t if t.is_empty() => default_player_type(),
                t => t,
            },
            email: normalize(draft.email),
            created_at,
        };

        self.state.profile = Some(profile.clone());
        persist(self.store.as_mut(), StoreKey::Player, &self.state.profile)?;
        Ok(profile)
    }

    /// Remove the stored profile; subsequent reads return `None`.
    pub fn clear_profile(&mut self) -> Result<(), StoreError> {
        self.state.profile = None;
        self.store.remove(StoreKey::Player)
    }

    /// Clear every record: progress, scores, badges, and profile.
    ///
    /// Development/debug operation; the CLI gates it behind an explicit
    /// confirmation flag.
    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        for key in StoreKey::ALL {
            self.store.remove(key)?;
        }
        self.state = EngineState::default();
        Ok(())
    }
}

fn normalize(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

fn persist<T: Serialize>(
    store: &mut dyn StateStore,
    key: StoreKey,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|e| StoreError::Encode {
        record: key.name(),
        source: e,
    })?;
    store.write(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore {
        records: HashMap<&'static str, String>,
    }

    impl StateStore for MemStore {
        fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
            Ok(self.records.get(key.name()).cloned())
        }
        fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
            self.records.insert(key.name(), value.to_string());
            Ok(())
        }
        fn remove(&mut self, key: StoreKey) -> Result<(), StoreError> {
            self.records.remove(key.name());
            Ok(())
        }
    }

    fn level(title: &str, correct: usize, points: u32) -> Level {
        Level {
            title: title.into(),
            instruction: String::new(),
            question: format!("{title}?"),
            choices: vec!["a".into(), "b".into(), "c".into()],
            correct,
            points,
        }
    }

    /// The demo game from the end-to-end scenario: 3 levels, 10/15/20 points.
    fn logic_quest() -> Game {
        Game {
            id: "logic-quest".into(),
            title: "Logic Quest".into(),
            levels: vec![
                level("Level 1", 1, 10),
                level("Level 2", 0, 15),
                level("Level 3", 2, 20),
            ],
        }
    }

    fn fresh_engine() -> ProgressEngine {
        ProgressEngine::open(Box::new(MemStore::default()))
    }

    #[test]
    fn initialize_defaults_seeds_missing_games() {
        let mut engine = fresh_engine();
        let catalog = Catalog::new(vec![logic_quest()]);
        engine.initialize_defaults(&catalog).unwrap();

        assert_eq!(engine.unlocked("logic-quest"), 1);
        assert_eq!(engine.score("logic-quest"), 0);
    }

    #[test]
    fn initialize_defaults_never_overwrites() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        let catalog = Catalog::new(vec![game.clone()]);
        engine.initialize_defaults(&catalog).unwrap();
        engine.record_answer(&game, 0, 1).unwrap();
        assert_eq!(engine.unlocked("logic-quest"), 2);

        engine.initialize_defaults(&catalog).unwrap();
        assert_eq!(engine.unlocked("logic-quest"), 2);
        assert_eq!(engine.score("logic-quest"), 10);
    }

    #[test]
    fn correct_answer_at_frontier_unlocks_next() {
        let mut engine = fresh_engine();
        let game = logic_quest();

        let outcome = engine.record_answer(&game, 0, 1).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                points_awarded: 10,
                new_score: 10,
                unlocked_level: Some(2),
            }
        );

        // Answering the same level again adds points but cannot advance the
        // frontier past level 2.
        let outcome = engine.record_answer(&game, 0, 1).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                points_awarded: 10,
                new_score: 20,
                unlocked_level: None,
            }
        );
        assert_eq!(engine.unlocked("logic-quest"), 2);
    }

    #[test]
    fn replaying_earlier_level_scores_without_unlocking() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        engine.record_answer(&game, 0, 1).unwrap();
        engine.record_answer(&game, 1, 0).unwrap();
        assert_eq!(engine.unlocked("logic-quest"), 3);

        engine.record_answer(&game, 0, 1).unwrap();
        assert_eq!(engine.unlocked("logic-quest"), 3);
        assert_eq!(engine.score("logic-quest"), 35);
    }

    #[test]
    fn last_level_never_unlocks_beyond_level_count() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        engine.record_answer(&game, 0, 1).unwrap();
        engine.record_answer(&game, 1, 0).unwrap();

        let outcome = engine.record_answer(&game, 2, 2).unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome::Correct {
                points_awarded: 20,
                new_score: 45,
                unlocked_level: None,
            }
        );
        assert_eq!(engine.unlocked("logic-quest"), 3);
    }

    #[test]
    fn incorrect_answer_mutates_nothing() {
        let mut engine = fresh_engine();
        let game = logic_quest();

        let outcome = engine.record_answer(&game, 0, 2).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect { correct_index: 1 });
        assert_eq!(engine.score("logic-quest"), 0);
        assert_eq!(engine.unlocked("logic-quest"), 1);
    }

    #[test]
    fn score_accumulation_is_order_independent() {
        let game_a = Game {
            id: "a".into(),
            title: "A".into(),
            levels: vec![level("L1", 0, 10)],
        };
        let game_b = Game {
            id: "b".into(),
            title: "B".into(),
            levels: vec![level("L1", 0, 15)],
        };

        let mut ab = fresh_engine();
        ab.record_answer(&game_a, 0, 0).unwrap();
        ab.record_answer(&game_b, 0, 0).unwrap();

        let mut ba = fresh_engine();
        ba.record_answer(&game_b, 0, 0).unwrap();
        ba.record_answer(&game_a, 0, 0).unwrap();

        assert_eq!(ab.total_score(), ba.total_score());
        assert_eq!(ab.total_score(), 25);
    }

    #[test]
    fn badges_accumulate_in_threshold_order() {
        let mut engine = fresh_engine();
        let game = Game {
            id: "g".into(),
            title: "G".into(),
            levels: vec![
                level("L1", 0, 30),
                level("L2", 0, 30),
                level("L3", 0, 40),
            ],
        };

        assert!(engine.evaluate_badges().unwrap().is_empty());

        engine.record_answer(&game, 0, 0).unwrap();
        assert_eq!(engine.evaluate_badges().unwrap(), ["Bronze"]);

        engine.record_answer(&game, 1, 0).unwrap();
        assert_eq!(engine.evaluate_badges().unwrap(), ["Bronze", "Silver"]);

        engine.record_answer(&game, 2, 0).unwrap();
        assert_eq!(
            engine.evaluate_badges().unwrap(),
            ["Bronze", "Silver", "Gold"]
        );

        // Idempotent with an unchanged score.
        assert_eq!(
            engine.evaluate_badges().unwrap(),
            ["Bronze", "Silver", "Gold"]
        );
    }

    #[test]
    fn badge_jump_awards_all_crossed_thresholds() {
        let mut engine = fresh_engine();
        let game = Game {
            id: "g".into(),
            title: "G".into(),
            levels: vec![level("L1", 0, 100)],
        };
        engine.record_answer(&game, 0, 0).unwrap();
        assert_eq!(
            engine.evaluate_badges().unwrap(),
            ["Bronze", "Silver", "Gold"]
        );
    }

    #[test]
    fn custom_badge_rules() {
        let mut engine = fresh_engine().with_badge_rules(vec![BadgeRule::new(5, "Starter")]);
        let game = Game {
            id: "g".into(),
            title: "G".into(),
            levels: vec![level("L1", 0, 5)],
        };
        engine.record_answer(&game, 0, 0).unwrap();
        assert_eq!(engine.evaluate_badges().unwrap(), ["Starter"]);
    }

    #[test]
    fn game_summary_projection() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        engine.record_answer(&game, 0, 1).unwrap();

        assert_eq!(
            engine.game_summary(&game),
            GameSummary {
                unlocked: 2,
                total_levels: 3,
                score: 10,
            }
        );
    }

    #[test]
    fn save_profile_rejects_empty_name() {
        let mut engine = fresh_engine();
        let err = engine
            .save_profile(ProfileDraft {
                name: "   ".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, ProfileError::EmptyName));
        assert!(engine.profile().is_none());
    }

    #[test]
    fn save_profile_normalizes_fields() {
        let mut engine = fresh_engine();
        let profile = engine
            .save_profile(ProfileDraft {
                name: "  Ana  ".into(),
                school: Some(" Springfield ".into()),
                player_type: None,
                email: None,
            })
            .unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.school, "Springfield");
        assert_eq!(profile.player_type, "general");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn profile_update_preserves_created_at() {
        let mut engine = fresh_engine();
        let first = engine
            .save_profile(ProfileDraft {
                name: "Ana".into(),
                ..Default::default()
            })
            .unwrap();

        let second = engine
            .save_profile(ProfileDraft {
                name: "Ana".into(),
                school: Some("X".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.school, "X");
    }

    #[test]
    fn clear_profile_removes_record() {
        let mut engine = fresh_engine();
        engine
            .save_profile(ProfileDraft {
                name: "Ana".into(),
                ..Default::default()
            })
            .unwrap();
        engine.clear_profile().unwrap();
        assert!(engine.profile().is_none());
    }

    #[test]
    fn reset_then_initialize_restores_defaults() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        let catalog = Catalog::new(vec![game.clone()]);
        engine.initialize_defaults(&catalog).unwrap();
        engine.record_answer(&game, 0, 1).unwrap();
        engine.evaluate_badges().unwrap();
        engine
            .save_profile(ProfileDraft {
                name: "Ana".into(),
                ..Default::default()
            })
            .unwrap();

        engine.reset_all().unwrap();
        engine.initialize_defaults(&catalog).unwrap();

        assert_eq!(engine.unlocked("logic-quest"), 1);
        assert_eq!(engine.score("logic-quest"), 0);
        assert!(engine.badges().is_empty());
        assert!(engine.profile().is_none());
    }

    #[test]
    fn end_to_end_logic_quest_scenario() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        let catalog = Catalog::new(vec![game.clone()]);
        engine.initialize_defaults(&catalog).unwrap();

        let outcome = engine.record_answer(&game, 0, 1).unwrap();
        assert!(outcome.is_correct());
        assert_eq!(engine.score("logic-quest"), 10);
        assert_eq!(engine.unlocked("logic-quest"), 2);

        let outcome = engine.record_answer(&game, 1, 0).unwrap();
        assert!(outcome.is_correct());
        assert_eq!(engine.score("logic-quest"), 25);
        assert_eq!(engine.unlocked("logic-quest"), 3);

        let outcome = engine.record_answer(&game, 2, 0).unwrap();
        assert_eq!(outcome, AnswerOutcome::Incorrect { correct_index: 2 });
        assert_eq!(engine.score("logic-quest"), 25);
        assert_eq!(engine.unlocked("logic-quest"), 3);
    }

    #[test]
    #[should_panic(expected = "level index")]
    fn out_of_range_level_panics() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        let _ = engine.record_answer(&game, 3, 0);
    }

    #[test]
    #[should_panic(expected = "choice index")]
    fn out_of_range_choice_panics() {
        let mut engine = fresh_engine();
        let game = logic_quest();
        let _ = engine.record_answer(&game, 0, 9);
    }
}
