#![cfg(target_arch = "wasm32")]

use pagespy_core::{GeometrySource, PageConfig, PreferenceStore};
use pagespy_web::dom;
use pagespy_web::geometry::DomGeometry;
use pagespy_web::page;
use pagespy_web::prefs::LocalStoragePreferences;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div id="rail-nav"></div>
<div id="rail-track"></div>
<button id="data-toggle"><span id="toggle-circle"></span></button>
<span id="state-raw"></span><span id="state-processed"></span>
<span id="rows-value"></span><span id="size-value"></span>
<section id="overview" style="height: 2000px"><h2> Overview </h2></section>
<section id="transformation" style="height: 2000px"><h2>Transformation</h2></section>
"#;

fn mount_fixture() {
    let doc = dom::document().expect("document");
    let root = match doc.get_element_by_id("fixture") {
        Some(root) => root,
        None => {
            let root = doc.create_element("div").expect("create fixture root");
            root.set_id("fixture");
            doc.body()
                .expect("document body")
                .prepend_with_node_1(&root)
                .expect("insert fixture root");
            root
        }
    };
    root.set_inner_html(FIXTURE);
    dom::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn dom_geometry_reports_section_rects() {
    mount_fixture();
    let geometry = DomGeometry::current().expect("geometry");
    assert!(geometry.viewport_height() > 0.0);
    assert!(geometry.document_height() >= 4000.0);
    let rect = geometry.section_rect("overview").expect("overview rect");
    assert!((rect.height() - 2000.0).abs() < 1.0);
    assert!(geometry.section_rect("legal").is_none());
}

#[wasm_bindgen_test]
fn local_storage_round_trips_preferences() {
    let mut prefs = LocalStoragePreferences::new();
    prefs.set("pagespy-test", "dark").expect("write preference");
    assert_eq!(prefs.get("pagespy-test").as_deref(), Some("dark"));
}

#[wasm_bindgen_test]
fn registry_uses_trimmed_headings_for_present_sections() {
    mount_fixture();
    let registry = page::build_registry(&PageConfig::default());
    assert_eq!(registry.keys(), vec!["overview", "transformation"]);
    assert_eq!(registry.get(0).expect("first").label, "Overview");
}

#[wasm_bindgen_test]
fn initialize_marks_first_section_and_header_toggle_locks() {
    mount_fixture();
    let runtime = page::initialize(&PageConfig::default()).expect("runtime");
    assert_eq!(runtime.borrow().sync().active_section(), Some(0));

    let doc = dom::document().expect("document");
    let rows = doc.get_element_by_id("rows-value").expect("rows");
    runtime.borrow_mut().toggle_header();
    assert_eq!(rows.text_content().as_deref(), Some("1.02B"));
    let circle = doc.get_element_by_id("toggle-circle").expect("circle");
    assert!(circle.class_list().contains("translate-x-6"));
    assert!(!runtime.borrow().sync().header().auto_switch_enabled());

    let dot = doc.get_element_by_id("rail-dot-overview").expect("overview dot");
    assert!(dot.class_list().contains("scale-125"));
}
