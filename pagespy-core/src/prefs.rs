//! Preference storage
use std::collections::HashMap;

use thiserror::Error;

use crate::PreferenceStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Storage unavailable")]
    Unavailable,
}

/// In-memory preference store.
///
/// Used by tests and by hosts without persistent storage. A store created with
/// [`MemoryPreferences::read_only`] rejects every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values,
            read_only: false,
        }
    }

    #[must_use]
    pub fn read_only() -> Self {
        Self {
            values: HashMap::new(),
            read_only: true,
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = PreferenceError;

    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.read_only {
            return Err(PreferenceError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
