//! `localStorage`-backed preference store
use pagespy_core::{PreferenceError, PreferenceStore};
use web_sys::Storage;

use crate::dom;

/// Preference store over `window.localStorage`.
///
/// When storage is unavailable (private mode, sandboxed frames) reads return
/// nothing and writes fail with [`PreferenceError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct LocalStoragePreferences {
    storage: Option<Storage>,
}

impl LocalStoragePreferences {
    #[must_use]
    pub fn new() -> Self {
        let storage = match dom::local_storage() {
            Ok(storage) => Some(storage),
            Err(err) => {
                log::debug!("localStorage unavailable: {}", dom::js_error_message(&err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    type Error = PreferenceError;

    fn get(&self, key: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = self.storage.as_ref().ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| PreferenceError::Storage(dom::js_error_message(&err)))
    }
}
