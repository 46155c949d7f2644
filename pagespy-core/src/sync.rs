//! Per-tick scroll synchronization
//!
//! Owns every piece of scroll-derived state and recomputes it in a fixed
//! order on each tick: scroll-spy, header auto-switch, position indicator.

use serde::Serialize;

use crate::{
    GeometrySource, HeaderFrame, HeaderMachine, IndicatorFrame, PageConfig, ScrollSpy,
    SectionRegistry, SpyFrame,
};

/// Derived state produced by one tick. `None` fields mean "leave as is".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickFrame {
    pub spy: Option<SpyFrame>,
    pub header: Option<HeaderFrame>,
    pub indicator: Option<IndicatorFrame>,
}

#[derive(Debug, Clone)]
pub struct ScrollSync {
    registry: SectionRegistry,
    spy: Option<ScrollSpy>,
    header: HeaderMachine,
    trigger_section: String,
    marker_size: f64,
}

impl ScrollSync {
    /// `rail_enabled` is false when the page has no navigation rail; the
    /// scroll-spy is then skipped entirely.
    #[must_use]
    pub fn new(config: &PageConfig, registry: SectionRegistry, rail_enabled: bool) -> Self {
        Self {
            registry,
            spy: rail_enabled.then(|| ScrollSpy::new(config.trigger_ratio)),
            header: HeaderMachine::with_trigger_ratio(config.trigger_ratio),
            trigger_section: config.trigger_section.clone(),
            marker_size: config.marker_size,
        }
    }

    /// Recompute all scroll-derived state.
    ///
    /// `track_height` is the indicator track's pixel height, `None` when the
    /// indicator is not on the page.
    pub fn tick<G>(&mut self, geometry: &G, track_height: Option<f64>) -> TickFrame
    where
        G: GeometrySource + ?Sized,
    {
        let spy = self
            .spy
            .as_mut()
            .and_then(|spy| spy.recompute(&self.registry, geometry));
        let trigger_top = geometry.section_rect(&self.trigger_section).map(|r| r.top);
        let header = self
            .header
            .auto_switch(trigger_top, geometry.viewport_height());
        let indicator =
            track_height.map(|track| IndicatorFrame::compute(geometry, track, self.marker_size));
        TickFrame {
            spy,
            header,
            indicator,
        }
    }

    /// Header toggle click.
    pub fn toggle_header(&mut self) -> HeaderFrame {
        self.header.toggle_manual()
    }

    #[must_use]
    pub const fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn header(&self) -> &HeaderMachine {
        &self.header
    }

    #[must_use]
    pub fn active_section(&self) -> Option<usize> {
        self.spy.as_ref().and_then(ScrollSpy::active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HeaderMode, SyntheticPage};

    fn page(config: &PageConfig) -> SyntheticPage {
        SyntheticPage::uniform(1000.0, &config.sections, 1200.0)
            .with_header(300.0)
            .with_footer(500.0)
    }

    #[test]
    fn tick_drives_all_three_components() {
        let config = PageConfig::default();
        let mut page = page(&config);
        let mut sync = ScrollSync::new(&config, page.registry(&config.sections), true);

        let first = sync.tick(&page, Some(232.0));
        assert!(first.spy.is_some(), "overview crosses the line at the top");
        assert_eq!(first.header, None);
        assert_eq!(first.indicator.map(|i| i.offset), Some(0.0));

        let trigger = page.section_offset("transformation").expect("trigger exists");
        page.scroll_to(trigger - 400.0);
        let frame = sync.tick(&page, Some(232.0));
        assert_eq!(frame.header.map(|h| h.mode), Some(HeaderMode::Processed));
        assert_eq!(
            sync.active_section(),
            sync.registry().index_of("transformation")
        );
    }

    #[test]
    fn manual_toggle_freezes_header_for_the_session() {
        let config = PageConfig::default();
        let mut page = page(&config);
        let mut sync = ScrollSync::new(&config, page.registry(&config.sections), true);
        sync.tick(&page, None);
        assert_eq!(sync.toggle_header().mode, HeaderMode::Processed);

        let mut offset = page.max_scroll();
        while offset >= 0.0 {
            page.scroll_to(offset);
            assert_eq!(sync.tick(&page, None).header, None);
            assert_eq!(sync.header().mode(), HeaderMode::Processed);
            offset -= 250.0;
        }
    }

    #[test]
    fn page_without_rail_still_updates_header_and_indicator() {
        let config = PageConfig::default();
        let mut page = page(&config);
        let mut sync = ScrollSync::new(&config, page.registry(&config.sections), false);
        page.scroll_to(page.max_scroll());
        let frame = sync.tick(&page, Some(232.0));
        assert_eq!(frame.spy, None);
        assert_eq!(sync.active_section(), None);
        assert!(frame.header.is_some());
        assert_eq!(frame.indicator.map(|i| i.offset), Some(200.0));
    }

    #[test]
    fn page_without_trigger_section_never_auto_switches() {
        let config = PageConfig::default();
        let mut page = SyntheticPage::uniform(1000.0, &["overview", "legal"], 1500.0);
        let mut sync = ScrollSync::new(&config, page.registry(&config.sections), true);
        page.scroll_to(page.max_scroll());
        assert_eq!(sync.tick(&page, None).header, None);
        assert_eq!(sync.header().mode(), HeaderMode::Raw);
    }
}
