//! Ordered registry of the page's content sections
use serde::{Deserialize, Serialize};

/// A named content block tracked by the navigation rail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    pub label: String,
}

impl Section {
    /// Build a section, labelling it with the trimmed heading text or the key
    /// when the heading is missing or blank.
    #[must_use]
    pub fn new(key: &str, heading: Option<&str>) -> Self {
        let label = heading
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(key);
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Sections present on the page, in page order.
///
/// Built once at setup. Keys whose container is missing are skipped outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build the registry from the known keys.
    ///
    /// `probe` looks a key up on the page: `None` when its container is absent,
    /// otherwise the text of its first heading, if any.
    pub fn build<K, F>(keys: &[K], mut probe: F) -> Self
    where
        K: AsRef<str>,
        F: FnMut(&str) -> Option<Option<String>>,
    {
        let sections = keys
            .iter()
            .filter_map(|key| {
                let key = key.as_ref();
                probe(key).map(|heading| Section::new(key, heading.as_deref()))
            })
            .collect();
        Self { sections }
    }

    #[must_use]
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }
}
