//! pagespy page engine
//!
//! Platform-agnostic state logic for the pagespy page-enhancement layer:
//! scroll-spy navigation, the two-state data header, the scroll position
//! indicator, theme resolution and fragment loading. Everything here is driven
//! through the [`GeometrySource`] and [`PreferenceStore`] seams so it can run
//! against synthetic layouts without a browser.

pub mod config;
pub mod fragments;
pub mod geometry;
pub mod header;
pub mod indicator;
pub mod layout;
pub mod prefs;
pub mod scroll_spy;
pub mod sections;
pub mod sync;
pub mod theme;

pub use config::{ConfigError, PageConfig};
pub use fragments::{
    FragmentError, FragmentFetcher, FragmentOutcome, FragmentSink, LoadReport, container_id,
    fragment_path, load_fragments,
};
pub use geometry::Rect;
pub use header::{HeaderFrame, HeaderLabel, HeaderMachine, HeaderMode, HeaderPayload};
pub use indicator::{MARKER_SIZE, IndicatorFrame, marker_offset, scroll_fraction};
pub use layout::SyntheticPage;
pub use prefs::{MemoryPreferences, PreferenceError};
pub use scroll_spy::{NavEntryState, ScrollSpy, SpyFrame, active_candidate, progress_percent};
pub use sections::{Section, SectionRegistry};
pub use sync::{ScrollSync, TickFrame};
pub use theme::{Theme, ThemeController};

/// Read-only view of the live page geometry.
///
/// Platform-specific implementations should provide this. Every query is
/// expected to be fresh; callers never cache the results between ticks.
pub trait GeometrySource {
    /// Current vertical scroll offset of the page in pixels.
    fn scroll_offset(&self) -> f64;

    /// Height of the visible viewport in pixels.
    fn viewport_height(&self) -> f64;

    /// Total scrollable height of the document in pixels.
    fn document_height(&self) -> f64;

    /// Bounding rectangle of the section container keyed by `key`, relative to
    /// the viewport. Returns `None` when the section is not present.
    fn section_rect(&self, key: &str) -> Option<Rect>;
}

/// Key-value store backing persisted user preferences.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Read a stored value, `None` when the key was never written.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}
