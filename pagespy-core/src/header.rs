//! Two-state data header
//!
//! The header shows either the raw or the processed dataset figures. It
//! follows the trigger section automatically until the user clicks the
//! toggle; from then on only clicks change it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    #[default]
    Raw,
    Processed,
}

impl HeaderMode {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Raw => Self::Processed,
            Self::Processed => Self::Raw,
        }
    }

    #[must_use]
    pub const fn payload(self) -> HeaderPayload {
        match self {
            Self::Raw => HeaderPayload {
                rows: "1.4B",
                size: "70GB",
            },
            Self::Processed => HeaderPayload {
                rows: "1.02B",
                size: "250MB",
            },
        }
    }
}

/// Figures shown in the header for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderPayload {
    pub rows: &'static str,
    pub size: &'static str,
}

/// The two state labels next to the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeaderLabel {
    Raw,
    Processed,
}

/// Everything the renderer needs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderFrame {
    pub mode: HeaderMode,
    pub payload: HeaderPayload,
    pub emphasized: HeaderLabel,
    pub marker_shifted: bool,
}

impl From<HeaderMode> for HeaderFrame {
    fn from(mode: HeaderMode) -> Self {
        let processed = matches!(mode, HeaderMode::Processed);
        Self {
            mode,
            payload: mode.payload(),
            emphasized: if processed {
                HeaderLabel::Processed
            } else {
                HeaderLabel::Raw
            },
            marker_shifted: processed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderMachine {
    mode: HeaderMode,
    auto_switch_enabled: bool,
    trigger_ratio: f64,
}

impl Default for HeaderMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: HeaderMode::Raw,
            auto_switch_enabled: true,
            trigger_ratio: 0.5,
        }
    }

    /// Machine whose trigger line sits at `ratio` of the viewport height.
    #[must_use]
    pub fn with_trigger_ratio(ratio: f64) -> Self {
        Self {
            trigger_ratio: ratio.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    #[must_use]
    pub const fn mode(&self) -> HeaderMode {
        self.mode
    }

    #[must_use]
    pub const fn auto_switch_enabled(&self) -> bool {
        self.auto_switch_enabled
    }

    #[must_use]
    pub fn frame(&self) -> HeaderFrame {
        HeaderFrame::from(self.mode)
    }

    #[must_use]
    pub fn trigger_point(&self, viewport_height: f64) -> f64 {
        viewport_height * self.trigger_ratio
    }

    /// Manual click: flip the mode and disable automatic switching for good.
    pub fn toggle_manual(&mut self) -> HeaderFrame {
        self.mode = self.mode.flipped();
        self.auto_switch_enabled = false;
        self.frame()
    }

    /// Scroll tick: follow the trigger section's top edge.
    ///
    /// Returns the new frame only when the mode changed. Does nothing once a
    /// manual toggle happened or when the trigger section is absent.
    pub fn auto_switch(
        &mut self,
        trigger_top: Option<f64>,
        viewport_height: f64,
    ) -> Option<HeaderFrame> {
        if !self.auto_switch_enabled {
            return None;
        }
        let top = trigger_top?;
        let above = top < self.trigger_point(viewport_height);
        let next = match (self.mode, above) {
            (HeaderMode::Raw, true) => HeaderMode::Processed,
            (HeaderMode::Processed, false) => HeaderMode::Raw,
            _ => return None,
        };
        self.mode = next;
        Some(self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_the_midline_switches_to_processed() {
        let mut header = HeaderMachine::new();
        let frame = header.auto_switch(Some(400.0), 1000.0).expect("transition");
        assert_eq!(frame.mode, HeaderMode::Processed);
        assert_eq!(frame.payload.rows, "1.02B");
        assert_eq!(frame.payload.size, "250MB");
        assert_eq!(frame.emphasized, HeaderLabel::Processed);
        assert!(frame.marker_shifted);
    }

    #[test]
    fn below_midline_returns_to_raw() {
        let mut header = HeaderMachine::new();
        header.auto_switch(Some(400.0), 1000.0);
        let frame = header.auto_switch(Some(600.0), 1000.0).expect("transition");
        assert_eq!(frame.mode, HeaderMode::Raw);
        assert_eq!(frame.payload.rows, "1.4B");
        assert_eq!(frame.payload.size, "70GB");
        assert_eq!(frame.emphasized, HeaderLabel::Raw);
        assert!(!frame.marker_shifted);
    }

    #[test]
    fn exactly_on_the_line_counts_as_below() {
        let mut header = HeaderMachine::new();
        assert_eq!(header.auto_switch(Some(500.0), 1000.0), None);
        assert_eq!(header.mode(), HeaderMode::Raw);
    }

    #[test]
    fn steady_state_emits_nothing() {
        let mut header = HeaderMachine::new();
        assert_eq!(header.auto_switch(Some(900.0), 1000.0), None);
        header.auto_switch(Some(10.0), 1000.0);
        assert_eq!(header.auto_switch(Some(-300.0), 1000.0), None);
        assert_eq!(header.mode(), HeaderMode::Processed);
    }

    #[test]
    fn oscillation_near_the_line_flips_every_tick() {
        let mut header = HeaderMachine::new();
        for tick in 0..6 {
            let top = if tick % 2 == 0 { 499.0 } else { 501.0 };
            assert!(header.auto_switch(Some(top), 1000.0).is_some());
        }
    }

    #[test]
    fn manual_toggle_locks_out_auto_switch() {
        let mut header = HeaderMachine::new();
        let frame = header.toggle_manual();
        assert_eq!(frame.mode, HeaderMode::Processed);
        assert!(!header.auto_switch_enabled());
        for top in [-5000.0, 0.0, 499.0, 500.0, 5000.0] {
            assert_eq!(header.auto_switch(Some(top), 1000.0), None);
            assert_eq!(header.mode(), HeaderMode::Processed);
        }
        assert_eq!(header.toggle_manual().mode, HeaderMode::Raw);
        assert!(!header.auto_switch_enabled());
    }

    #[test]
    fn missing_trigger_section_never_switches() {
        let mut header = HeaderMachine::new();
        assert_eq!(header.auto_switch(None, 1000.0), None);
        assert!(header.auto_switch_enabled());
    }

    #[test]
    fn custom_trigger_ratio_moves_the_line() {
        let mut header = HeaderMachine::with_trigger_ratio(0.25);
        assert!((header.trigger_point(1000.0) - 250.0).abs() < f64::EPSILON);
        assert_eq!(header.auto_switch(Some(300.0), 1000.0), None);
        assert!(header.auto_switch(Some(200.0), 1000.0).is_some());
    }
}
