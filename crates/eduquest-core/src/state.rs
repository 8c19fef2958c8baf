//! Persisted engine state and its lenient loader.
//!
//! The four records mirror the persisted layout: `progress` (game id →
//! unlock state), `scores` (game id → cumulative score), `badges` (earned
//! names in insertion order), and `player` (the optional profile).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::PlayerProfile;
use crate::traits::{StateStore, StoreKey};

/// Unlock state for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    /// Number of accessible levels, 1-indexed: `unlocked = k` means levels
    /// `1..=k` are playable. At least 1, never more than the level count.
    pub unlocked: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self { unlocked: 1 }
    }
}

/// In-memory mirror of the persisted records.
#[derive(Debug, Clone, Default)]
pub struct EngineState {
    pub progress: HashMap<String, GameProgress>,
    pub scores: HashMap<String, u32>,
    pub badges: Vec<String>,
    pub profile: Option<PlayerProfile>,
}

impl EngineState {
    /// Load all records from a store.
    ///
    /// Read failures and unparseable records degrade to defaults: this data
    /// is low-stakes and locally owned, so availability wins over strict
    /// consistency. Each failure is logged with the record name so corrupt
    /// state is at least observable.
    pub fn load(store: &dyn StateStore) -> Self {
        Self {
            progress: decode_or_default(store, StoreKey::Progress),
            scores: decode_or_default(store, StoreKey::Scores),
            badges: decode_or_default(store, StoreKey::Badges),
            profile: decode_or_default::<Option<PlayerProfile>>(store, StoreKey::Player),
        }
    }
}

fn decode_or_default<T: Default + for<'de> Deserialize<'de>>(
    store: &dyn StateStore,
    key: StoreKey,
) -> T {
    let raw = match store.read(key) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("failed to read {key} record, using defaults: {e}");
            return T::default();
        }
    };
    match raw {
        None => T::default(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("malformed {key} record, using defaults: {e}");
                T::default()
            }
        },
    }
}
