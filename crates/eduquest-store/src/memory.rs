//! In-memory store for tests.

use std::collections::HashMap;

use eduquest_core::error::StoreError;
use eduquest_core::traits::{StateStore, StoreKey};

/// A `HashMap`-backed store that counts writes, so tests can assert how
/// often the engine persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<&'static str, String>,
    write_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record before handing the store to an engine.
    pub fn with_record(mut self, key: StoreKey, value: &str) -> Self {
        self.records.insert(key.name(), value.to_string());
        self
    }

    /// Number of writes (not removals) made through this store.
    pub fn write_count(&self) -> u32 {
        self.write_count
    }

    /// Raw value of a record, if present.
    pub fn record(&self, key: StoreKey) -> Option<&str> {
        self.records.get(key.name()).map(String::as_str)
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(key.name()).cloned())
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.write_count += 1;
        self.records.insert(key.name(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StoreKey) -> Result<(), StoreError> {
        self.records.remove(key.name());
        Ok(())
    }
}
