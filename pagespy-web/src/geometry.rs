//! Live DOM geometry
use pagespy_core::{GeometrySource, Rect};
use web_sys::{Document, Window};

/// Reads positions straight from the rendered page on every query.
#[derive(Debug, Clone)]
pub struct DomGeometry {
    window: Window,
    document: Document,
}

impl DomGeometry {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// Geometry for the current browser window, `None` outside a browser.
    #[must_use]
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self::new(window, document))
    }

    /// Client height of the element `id`, if present.
    #[must_use]
    pub fn client_height(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| f64::from(el.client_height()))
    }
}

impl GeometrySource for DomGeometry {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn document_height(&self) -> f64 {
        self.document
            .document_element()
            .map_or(0.0, |el| f64::from(el.scroll_height()))
    }

    fn section_rect(&self, key: &str) -> Option<Rect> {
        let rect = self.document.get_element_by_id(key)?.get_bounding_client_rect();
        Some(Rect::new(rect.top(), rect.bottom()))
    }
}
