//! String key-value storage backends

use std::collections::HashMap;

use super::PersistenceError;

/// Synchronous string key-value store
pub trait KeyValueStorage {
    /// Read a key; `Ok(None)` when absent
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    /// Write a key
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    /// Remove every key
    fn clear(&mut self) -> Result<(), PersistenceError>;
}

/// In-memory storage for tests and non-browser hosts
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw stored value
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistenceError> {
        self.entries.clear();
        Ok(())
    }
}
