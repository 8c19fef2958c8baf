//! Storage trait between the engine and its persistence backends.
//!
//! Implementations live in the `eduquest-store` crate. The contract is a
//! plain key-value store over opaque JSON strings: the engine owns all
//! encoding and decoding, so a backend never needs to understand record
//! shapes.

use std::fmt;

use crate::error::StoreError;

/// The four persisted records.
///
/// A closed enum rather than free-form string keys: the set of records is
/// fixed by the engine, and `reset_all` must be able to enumerate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Per-game unlock state.
    Progress,
    /// Per-game cumulative scores.
    Scores,
    /// Earned badge names in insertion order.
    Badges,
    /// The player profile, absent until first saved.
    Player,
}

impl StoreKey {
    /// All records, in the order `reset_all` clears them.
    pub const ALL: [StoreKey; 4] = [
        StoreKey::Progress,
        StoreKey::Scores,
        StoreKey::Badges,
        StoreKey::Player,
    ];

    /// Stable record name used by backends (file names, map keys).
    pub fn name(self) -> &'static str {
        match self {
            StoreKey::Progress => "progress",
            StoreKey::Scores => "scores",
            StoreKey::Badges => "badges",
            StoreKey::Player => "player",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key-value persistence for engine state.
///
/// Exactly one engine instance writes to a store at a time; implementations
/// do not need internal locking.
pub trait StateStore {
    /// Read a record, `None` if it was never written or has been removed.
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    /// Write a record, replacing any previous value.
    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;

    /// Remove a record. Removing an absent record is a no-op.
    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError>;
}
