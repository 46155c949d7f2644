//! Applies derived frames to the page.
//!
//! Elements are looked up once per view; the rail dots and labels are looked
//! up per tick because the rail renderer owns them.

use pagespy_core::{HeaderFrame, HeaderLabel, IndicatorFrame, SpyFrame, TickFrame};
use web_sys::{Element, HtmlElement};

use crate::components::rail_nav::{DOT_ACTIVE, DOT_IDLE, LABEL_ACTIVE, LABEL_IDLE};
use crate::{dom, ids};

const LABEL_EMPHASIS: &[&str] = &["text-uber-black", "dark:text-white"];
const LABEL_MUTED: &[&str] = &["text-uber-gray500"];
const MARKER_SHIFT: &[&str] = &["translate-x-6"];

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::debug!("Cannot set {property}: {}", dom::js_error_message(&err));
    }
}

fn toggle_state(el: &Element, active: bool, on: &[&str], off: &[&str]) {
    if active {
        dom::swap_classes(el, on, off);
    } else {
        dom::swap_classes(el, off, on);
    }
}

/// Navigation rail: entry classes plus the progress track.
pub struct RailView {
    track: HtmlElement,
}

impl RailView {
    #[must_use]
    pub fn new(track: HtmlElement) -> Self {
        Self { track }
    }

    pub fn apply(&self, frame: &SpyFrame) {
        for entry in &frame.entries {
            if let Some(dot) = dom::element(&ids::rail_dot(&entry.key)) {
                toggle_state(&dot, entry.active, DOT_ACTIVE, DOT_IDLE);
            }
            if let Some(label) = dom::element(&ids::rail_label(&entry.key)) {
                toggle_state(&label, entry.active, LABEL_ACTIVE, LABEL_IDLE);
            }
        }
        set_style(&self.track, "height", &format!("{}%", frame.progress_percent));
    }
}

/// Data header elements. Each one is optional.
#[derive(Default)]
pub struct HeaderView {
    circle: Option<Element>,
    raw: Option<Element>,
    processed: Option<Element>,
    rows: Option<Element>,
    size: Option<Element>,
}

impl HeaderView {
    #[must_use]
    pub fn find() -> Self {
        Self {
            circle: dom::element(ids::TOGGLE_CIRCLE),
            raw: dom::element(ids::STATE_RAW),
            processed: dom::element(ids::STATE_PROCESSED),
            rows: dom::element(ids::ROWS_VALUE),
            size: dom::element(ids::SIZE_VALUE),
        }
    }

    pub fn apply(&self, frame: &HeaderFrame) {
        if let Some(circle) = &self.circle {
            toggle_state(circle, frame.marker_shifted, MARKER_SHIFT, &[]);
        }
        let raw_emphasized = frame.emphasized == HeaderLabel::Raw;
        if let Some(raw) = &self.raw {
            toggle_state(raw, raw_emphasized, LABEL_EMPHASIS, LABEL_MUTED);
        }
        if let Some(processed) = &self.processed {
            toggle_state(processed, !raw_emphasized, LABEL_EMPHASIS, LABEL_MUTED);
        }
        if let Some(rows) = &self.rows {
            rows.set_text_content(Some(frame.payload.rows));
        }
        if let Some(size) = &self.size {
            size.set_text_content(Some(frame.payload.size));
        }
    }
}

/// Scroll position marker and its track.
pub struct IndicatorView {
    track: Element,
    marker: HtmlElement,
}

impl IndicatorView {
    /// Present only when both the track and the marker exist.
    #[must_use]
    pub fn find() -> Option<Self> {
        Some(Self {
            track: dom::element(ids::ROUTE_SCROLLBAR)?,
            marker: dom::html_element(ids::CAR_THUMB)?,
        })
    }

    #[must_use]
    pub fn track_height(&self) -> f64 {
        f64::from(self.track.client_height())
    }

    pub fn apply(&self, frame: &IndicatorFrame) {
        set_style(&self.marker, "top", &format!("{}px", frame.offset));
    }
}

/// Every view the scroll tick renders into.
pub struct PageView {
    pub rail: Option<RailView>,
    pub header: HeaderView,
    pub indicator: Option<IndicatorView>,
}

impl PageView {
    #[must_use]
    pub fn track_height(&self) -> Option<f64> {
        self.indicator.as_ref().map(IndicatorView::track_height)
    }

    pub fn apply(&self, frame: &TickFrame) {
        if let (Some(rail), Some(spy)) = (&self.rail, &frame.spy) {
            rail.apply(spy);
        }
        if let Some(header) = &frame.header {
            self.header.apply(header);
        }
        if let (Some(indicator), Some(position)) = (&self.indicator, &frame.indicator) {
            indicator.apply(position);
        }
    }
}
