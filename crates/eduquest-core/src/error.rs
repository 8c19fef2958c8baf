//! Engine error types.
//!
//! Defined in `eduquest-core` so callers can match on variants for
//! user-facing messages instead of string matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the underlying key-value store.
///
/// Read-side decode failures never surface as errors — the engine degrades
/// to defaults (see [`crate::state::EngineState::load`]). These variants
/// cover the write path, where losing a mutation silently is not acceptable.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O failure while reading or writing a record.
    #[error("store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized before writing.
    #[error("failed to encode {record} record: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from saving a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The name was empty or whitespace-only. The stored profile is left
    /// untouched.
    #[error("player name must not be empty")]
    EmptyName,

    /// The validated profile could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_mentions_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/scores.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/scores.json"));
    }

    #[test]
    fn profile_error_message() {
        assert!(matches!(ProfileError::EmptyName, ProfileError::EmptyName));
        assert_eq!(
            ProfileError::EmptyName.to_string(),
            "player name must not be empty"
        );
    }
}
