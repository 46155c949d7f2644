use futures::executor::block_on;
use pagespy_core::{PageConfig, SyntheticPage};
use pagespy_web::components::rail_nav::{Props, RailNav};
use yew::{Callback, LocalServerRenderer};

fn render(props: Props) -> String {
    block_on(LocalServerRenderer::<RailNav>::with_props(props).render())
}

#[test]
fn rail_lists_only_sections_present_on_the_page() {
    let config = PageConfig::default();
    let page = SyntheticPage::new(800.0)
        .section("overview", 900.0)
        .section("impact", 900.0);
    let registry = page.registry(&config.sections);

    let html = render(Props {
        sections: registry.iter().cloned().collect(),
        active: None,
        on_select: Callback::noop(),
    });
    assert!(html.contains("rail-dot-overview"));
    assert!(html.contains("rail-dot-impact"));
    assert!(!html.contains("rail-dot-transformation"), "{html}");
    assert_eq!(html.matches("data-section=").count(), 2);
}

#[test]
fn rail_labels_fall_back_to_section_key() {
    let page = SyntheticPage::new(800.0).section("roadmap", 400.0);
    let registry = page.registry(&["roadmap"]);
    let html = render(Props {
        sections: registry.iter().cloned().collect(),
        active: Some(0),
        on_select: Callback::noop(),
    });
    assert!(html.contains(">roadmap<") || html.contains("roadmap</span>"), "{html}");
    assert_eq!(html.matches("scale-125").count(), 1);
}

#[test]
fn empty_rail_renders_nothing() {
    let html = render(Props {
        sections: Vec::new(),
        active: None,
        on_select: Callback::noop(),
    });
    assert!(!html.contains("rail-dot-"));
}
