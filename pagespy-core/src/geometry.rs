//! Viewport-relative rectangles
use serde::{Deserialize, Serialize};

/// Vertical extent of an element relative to the top of the viewport.
///
/// Negative values mean the edge has scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    #[must_use]
    pub fn from_top_and_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the rectangle has crossed `line` while still extending below the
    /// viewport's top edge.
    #[must_use]
    pub fn straddles(&self, line: f64) -> bool {
        self.top < line && self.bottom > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn straddles_requires_top_above_line_and_bottom_below_viewport_top() {
        assert!(Rect::new(100.0, 900.0).straddles(500.0));
        assert!(!Rect::new(500.0, 900.0).straddles(500.0));
        assert!(!Rect::new(-900.0, 0.0).straddles(500.0));
        assert!(Rect::new(-900.0, 1.0).straddles(500.0));
    }

    #[test]
    fn height_never_negative() {
        assert!((Rect::from_top_and_height(10.0, -5.0).height()).abs() < f64::EPSILON);
        assert!((Rect::new(10.0, 60.0).height() - 50.0).abs() < f64::EPSILON);
    }
}
