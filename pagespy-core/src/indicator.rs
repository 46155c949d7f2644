//! Scroll position indicator
use serde::{Deserialize, Serialize};

use crate::GeometrySource;

/// Pixel extent of the indicator marker.
pub const MARKER_SIZE: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorFrame {
    pub fraction: f64,
    /// Marker offset from the top of the track, in pixels.
    pub offset: f64,
}

impl IndicatorFrame {
    pub fn compute<G>(geometry: &G, track_height: f64, marker_size: f64) -> Self
    where
        G: GeometrySource + ?Sized,
    {
        let fraction = scroll_fraction(
            geometry.scroll_offset(),
            geometry.document_height(),
            geometry.viewport_height(),
        );
        Self {
            fraction,
            offset: marker_offset(fraction, track_height, marker_size),
        }
    }
}

/// Fraction of the scrollable range already scrolled, in `[0, 1]`.
///
/// A document that cannot scroll reports 0.
#[must_use]
pub fn scroll_fraction(scroll_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range.is_nan() || range <= 0.0 {
        return 0.0;
    }
    let fraction = scroll_offset / range;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Marker position along a track so the marker never overshoots its end.
#[must_use]
pub fn marker_offset(fraction: f64, track_height: f64, marker_size: f64) -> f64 {
    (fraction * (track_height - marker_size)).max(0.0)
}
