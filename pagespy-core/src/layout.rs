//! Synthetic page layouts
//!
//! A stacked column of blocks (header, sections, footer) scrolled inside a
//! fixed viewport. Implements [`GeometrySource`] so the scroll logic can be
//! exercised without a rendering surface.

use serde::{Deserialize, Serialize};

use crate::{GeometrySource, Rect, SectionRegistry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSection {
    pub key: String,
    pub height: f64,
    #[serde(default)]
    pub heading: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPage {
    pub viewport_height: f64,
    #[serde(default)]
    pub header_height: f64,
    #[serde(default)]
    pub footer_height: f64,
    #[serde(default)]
    pub sections: Vec<SyntheticSection>,
    #[serde(default)]
    scroll: f64,
}

impl SyntheticPage {
    #[must_use]
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            header_height: 0.0,
            footer_height: 0.0,
            sections: Vec::new(),
            scroll: 0.0,
        }
    }

    #[must_use]
    pub fn with_header(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    #[must_use]
    pub fn with_footer(mut self, height: f64) -> Self {
        self.footer_height = height;
        self
    }

    #[must_use]
    pub fn section(mut self, key: &str, height: f64) -> Self {
        self.sections.push(SyntheticSection {
            key: key.to_string(),
            height,
            heading: None,
        });
        self
    }

    /// Evenly sized sections for every key.
    #[must_use]
    pub fn uniform<K: AsRef<str>>(viewport_height: f64, keys: &[K], height: f64) -> Self {
        keys.iter()
            .fold(Self::new(viewport_height), |page, key| {
                page.section(key.as_ref(), height)
            })
    }

    /// Registry of the sections present on this page, probing `keys` the same
    /// way the browser setup probes the DOM.
    #[must_use]
    pub fn registry<K: AsRef<str>>(&self, keys: &[K]) -> SectionRegistry {
        SectionRegistry::build(keys, |key| {
            self.sections
                .iter()
                .find(|s| s.key == key)
                .map(|s| s.heading.clone())
        })
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.header_height + self.sections.iter().map(|s| s.height).sum::<f64>() + self.footer_height
    }

    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Scroll to `offset`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll = offset.clamp(0.0, self.max_scroll());
    }

    #[must_use]
    pub const fn scroll(&self) -> f64 {
        self.scroll
    }

    /// Document offset of the named section's top edge.
    #[must_use]
    pub fn section_offset(&self, key: &str) -> Option<f64> {
        let mut offset = self.header_height;
        for section in &self.sections {
            if section.key == key {
                return Some(offset);
            }
            offset += section.height;
        }
        None
    }
}

impl GeometrySource for SyntheticPage {
    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.content_height().max(self.viewport_height)
    }

    fn section_rect(&self, key: &str) -> Option<Rect> {
        let offset = self.section_offset(key)?;
        let height = self.sections.iter().find(|s| s.key == key)?.height;
        Some(Rect::from_top_and_height(offset - self.scroll, height))
    }
}
