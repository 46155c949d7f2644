//! Page setup and event wiring
//!
//! All scroll-derived state lives in one [`PageRuntime`] shared by the event
//! closures. Handlers run to completion on the UI thread, so a `RefCell` is
//! all the coordination needed.

use std::cell::RefCell;
use std::rc::Rc;

use pagespy_core::{PageConfig, ScrollSync, SectionRegistry, load_fragments};
use web_sys::{Element, HtmlElement};
use yew::Callback;

use crate::components::rail_nav::{Props as RailNavProps, RailNav};
use crate::fragments::{DomSink, WebFetcher};
use crate::geometry::DomGeometry;
use crate::render::{HeaderView, IndicatorView, PageView, RailView};
use crate::{dom, ids, theme};

pub struct PageRuntime {
    sync: ScrollSync,
    geometry: DomGeometry,
    view: PageView,
}

impl PageRuntime {
    /// Recompute and render every scroll-derived value.
    pub fn tick(&mut self) {
        let track = self.view.track_height();
        let frame = self.sync.tick(&self.geometry, track);
        self.view.apply(&frame);
    }

    /// Header toggle click.
    pub fn toggle_header(&mut self) {
        let frame = self.sync.toggle_header();
        self.view.header.apply(&frame);
    }

    #[must_use]
    pub const fn sync(&self) -> &ScrollSync {
        &self.sync
    }
}

/// Load all fragments, then set the page up.
#[allow(clippy::future_not_send)]
pub async fn boot(config: PageConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    let mut sink = DomSink::new(document);
    let report = load_fragments(
        &WebFetcher,
        &mut sink,
        &config.sections,
        &config.fragment_dir,
    )
    .await;
    log::info!(
        "Loaded {}/{} section fragments",
        report.loaded(),
        config.sections.len()
    );
    let _ = initialize(&config);
}

/// Sections present in the DOM, labelled by their first `h1`/`h2`.
#[must_use]
pub fn build_registry(config: &PageConfig) -> SectionRegistry {
    SectionRegistry::build(&config.sections, |key| {
        let section = dom::element(key)?;
        let heading = section
            .query_selector("h1, h2")
            .ok()
            .flatten()
            .and_then(|h| h.text_content());
        Some(heading)
    })
}

fn find_rail() -> Option<(Element, HtmlElement)> {
    let (Some(nav), Some(track)) = (
        dom::element(ids::RAIL_NAV),
        dom::html_element(ids::RAIL_TRACK),
    ) else {
        log::debug!("No navigation rail on the page; scroll-spy disabled");
        return None;
    };
    Some((nav, track))
}

fn mount_rail(
    nav: Element,
    track: HtmlElement,
    registry: &SectionRegistry,
    active: Option<usize>,
) -> RailView {
    let props = RailNavProps {
        sections: registry.iter().cloned().collect(),
        active,
        on_select: Callback::from(|key: String| dom::scroll_into_view(&key)),
    };
    yew::Renderer::<RailNav>::with_root_and_props(nav, props).render();
    RailView::new(track)
}

fn wire_header_toggle(runtime: &Rc<RefCell<PageRuntime>>) {
    let Some(toggle) = dom::element(ids::DATA_TOGGLE) else {
        return;
    };
    let runtime = Rc::clone(runtime);
    let result = dom::listen(toggle.as_ref(), "click", move |_| {
        runtime.borrow_mut().toggle_header();
    });
    if let Err(err) = result {
        log::warn!("Cannot attach header toggle: {}", dom::js_error_message(&err));
    }
}

fn wire_scroll(runtime: &Rc<RefCell<PageRuntime>>) {
    let Some(window) = dom::window() else {
        return;
    };
    let runtime = Rc::clone(runtime);
    let result = dom::listen(window.as_ref(), "scroll", move |_| {
        runtime.borrow_mut().tick();
    });
    if let Err(err) = result {
        log::warn!("Cannot attach scroll listener: {}", dom::js_error_message(&err));
    }
}

/// Apply the theme, build the rail, attach listeners and run the first tick.
///
/// Returns `None` outside a browser.
pub fn initialize(config: &PageConfig) -> Option<Rc<RefCell<PageRuntime>>> {
    theme::install(config);
    let geometry = DomGeometry::current()?;

    let registry = build_registry(config);
    log::info!(
        "Tracking {}/{} sections",
        registry.len(),
        config.sections.len()
    );
    let rail_host = find_rail();
    let mut sync = ScrollSync::new(config, registry, rail_host.is_some());
    let mut view = PageView {
        rail: None,
        header: HeaderView::find(),
        indicator: IndicatorView::find(),
    };

    // The rail renders with the first tick's active entry already marked
    let first = sync.tick(&geometry, view.track_height());
    view.rail = rail_host.map(|(nav, track)| {
        mount_rail(nav, track, sync.registry(), first.spy.as_ref().map(|s| s.active))
    });
    view.apply(&first);

    let runtime = Rc::new(RefCell::new(PageRuntime {
        sync,
        geometry,
        view,
    }));
    wire_header_toggle(&runtime);
    wire_scroll(&runtime);
    Some(runtime)
}
