//! Light/dark theme resolution and persistence
use serde::{Deserialize, Serialize};

use crate::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the startup theme.
    ///
    /// Only a stored `"dark"` forces dark mode; any other stored value means
    /// light. The ambient platform signal is consulted only when nothing is
    /// stored.
    #[must_use]
    pub fn resolve(stored: Option<&str>, ambient_dark: bool) -> Self {
        match stored {
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
            None if ambient_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

/// Owns the current theme and writes every change through to the store.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: Theme::Light,
        }
    }

    /// Resolve the theme from the stored preference, falling back to the
    /// ambient signal. Nothing is written at startup.
    pub fn initialize(&mut self, ambient_dark: bool) -> Theme {
        let stored = self.store.get(&self.key);
        self.current = Theme::resolve(stored.as_deref(), ambient_dark);
        self.current
    }

    /// Flip the theme and persist the new value.
    ///
    /// A failed write is logged; the flip still takes effect for this session.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("Failed to persist theme preference: {err}");
        }
        self.current
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
