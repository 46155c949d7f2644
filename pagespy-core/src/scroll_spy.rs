//! Scroll-spy navigation
//!
//! Picks the lowest section that has crossed the trigger line and derives the
//! navigation rail state from it. The active section only ever changes when a
//! candidate exists; a tick without candidates leaves the previous choice in
//! place.

use serde::{Deserialize, Serialize};

use crate::{GeometrySource, Rect, SectionRegistry};

/// Visual state of one navigation rail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntryState {
    pub key: String,
    pub active: bool,
}

/// Result of a scroll-spy pass that found an active section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpyFrame {
    pub active: usize,
    pub entries: Vec<NavEntryState>,
    /// Rail track fill, 0–100.
    pub progress_percent: f64,
}

impl SpyFrame {
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.active).count()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    trigger_ratio: f64,
    active: Option<usize>,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl ScrollSpy {
    #[must_use]
    pub const fn new(trigger_ratio: f64) -> Self {
        Self {
            trigger_ratio,
            active: None,
        }
    }

    /// Index of the active section, `None` until the first qualifying tick.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Re-evaluate the active section against fresh geometry.
    ///
    /// Returns `None`, leaving the previous state untouched, when no section
    /// qualifies.
    pub fn recompute<G>(&mut self, registry: &SectionRegistry, geometry: &G) -> Option<SpyFrame>
    where
        G: GeometrySource + ?Sized,
    {
        let rects = registry.iter().map(|s| geometry.section_rect(&s.key));
        let index = active_candidate(rects, geometry.viewport_height(), self.trigger_ratio)?;
        self.active = Some(index);
        self.frame(registry)
    }

    /// Rail state for the current active section, if any.
    #[must_use]
    pub fn frame(&self, registry: &SectionRegistry) -> Option<SpyFrame> {
        let active = self.active?;
        let entries = registry
            .iter()
            .enumerate()
            .map(|(idx, section)| NavEntryState {
                key: section.key.clone(),
                active: idx == active,
            })
            .collect();
        Some(SpyFrame {
            active,
            entries,
            progress_percent: progress_percent(active, registry.len()),
        })
    }
}

/// Index of the last rectangle that has crossed `viewport_height * ratio`
/// while still extending below the top of the viewport.
pub fn active_candidate<I>(rects: I, viewport_height: f64, ratio: f64) -> Option<usize>
where
    I: IntoIterator<Item = Option<Rect>>,
{
    let line = viewport_height * ratio;
    rects
        .into_iter()
        .enumerate()
        .filter_map(|(idx, rect)| rect.filter(|r| r.straddles(line)).map(|_| idx))
        .last()
}

/// Rail fill for the active index. Registries of zero or one section report 0.
#[must_use]
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let pct = index as f64 / (count - 1) as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntheticPage;

    const KEYS: [&str; 4] = ["overview", "architecture", "transformation", "legal"];

    fn page() -> SyntheticPage {
        SyntheticPage::uniform(1000.0, &KEYS, 900.0)
            .with_header(200.0)
            .with_footer(400.0)
    }

    #[test]
    fn later_candidates_win() {
        let rects = [
            Some(Rect::new(-500.0, 100.0)),
            Some(Rect::new(100.0, 900.0)),
            Some(Rect::new(450.0, 1300.0)),
            Some(Rect::new(700.0, 1500.0)),
        ];
        assert_eq!(active_candidate(rects, 1000.0, 0.5), Some(2));
    }

    #[test]
    fn missing_rects_never_qualify() {
        let rects = [Some(Rect::new(0.0, 800.0)), None];
        assert_eq!(active_candidate(rects, 1000.0, 0.5), Some(0));
        assert_eq!(active_candidate([None, None], 1000.0, 0.5), None);
    }

    #[test]
    fn no_candidate_retains_previous_active() {
        let mut page = SyntheticPage::new(1000.0)
            .with_header(800.0)
            .section("a", 600.0)
            .section("b", 600.0)
            .with_footer(1000.0);
        let registry = page.registry(&["a", "b"]);
        let mut spy = ScrollSpy::default();

        assert_eq!(spy.recompute(&registry, &page), None);
        assert_eq!(spy.active(), None);

        page.scroll_to(700.0);
        let frame = spy.recompute(&registry, &page).expect("a crossed the line");
        assert_eq!(frame.active, 0);

        page.scroll_to(0.0);
        assert_eq!(spy.recompute(&registry, &page), None);
        assert_eq!(spy.active(), Some(0));
    }

    #[test]
    fn exactly_one_entry_active_after_first_hit() {
        let mut page = page();
        let registry = page.registry(&KEYS);
        let mut spy = ScrollSpy::default();
        let mut seen_active = false;
        let mut offset = 0.0;
        while offset <= page.max_scroll() {
            page.scroll_to(offset);
            if let Some(frame) = spy.recompute(&registry, &page) {
                seen_active = true;
                assert_eq!(frame.active_count(), 1, "offset {offset}");
                assert_eq!(frame.entries.len(), registry.len());
            }
            if seen_active {
                let frame = spy.frame(&registry).expect("active retained");
                assert_eq!(frame.active_count(), 1);
            }
            offset += 37.0;
        }
        assert!(seen_active);
    }

    #[test]
    fn active_index_is_monotonic_on_downward_scroll() {
        let mut page = page();
        let registry = page.registry(&KEYS);
        let mut spy = ScrollSpy::default();
        let mut last = 0;
        let mut offset = 0.0;
        while offset <= page.max_scroll() {
            page.scroll_to(offset);
            spy.recompute(&registry, &page);
            if let Some(active) = spy.active() {
                assert!(active >= last, "regressed from {last} to {active}");
                last = active;
            }
            offset += 10.0;
        }
        page.scroll_to(page.max_scroll());
        let frame = spy.recompute(&registry, &page).expect("bottom has a candidate");
        assert_eq!(frame.active, KEYS.len() - 1);
        assert!((frame.progress_percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_linear_in_index() {
        assert!(progress_percent(0, 9).abs() < f64::EPSILON);
        assert!((progress_percent(4, 9) - 50.0).abs() < f64::EPSILON);
        assert!((progress_percent(8, 9) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_section_progress_is_zero_not_nan() {
        let page = SyntheticPage::uniform(1000.0, &["solo"], 2000.0);
        let registry = page.registry(&["solo"]);
        let mut spy = ScrollSpy::default();
        let frame = spy.recompute(&registry, &page).expect("solo section at top");
        assert!(!frame.progress_percent.is_nan());
        assert!(frame.progress_percent.abs() < f64::EPSILON);
        assert!(progress_percent(0, 0).abs() < f64::EPSILON);
    }
}
