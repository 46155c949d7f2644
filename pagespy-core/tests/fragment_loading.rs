use std::cell::RefCell;
use std::collections::HashMap;

use futures::executor::block_on;
use pagespy_core::{
    FragmentError, FragmentFetcher, FragmentOutcome, FragmentSink, PageConfig, container_id,
    load_fragments,
};

struct FakeFetcher {
    broken: Vec<&'static str>,
    requested: RefCell<Vec<String>>,
}

impl FragmentFetcher for FakeFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        self.requested.borrow_mut().push(path.to_string());
        if self.broken.iter().any(|name| path.contains(name)) {
            return Err(FragmentError::Http {
                status: 500,
                status_text: "Internal Server Error".into(),
            });
        }
        Ok(format!("<section>{path}</section>"))
    }
}

#[derive(Default)]
struct FakePage {
    containers: HashMap<String, Option<String>>,
}

impl FakePage {
    fn with_containers(names: &[String]) -> Self {
        Self {
            containers: names.iter().map(|n| (container_id(n), None)).collect(),
        }
    }
}

impl FragmentSink for FakePage {
    fn place(&mut self, name: &str, html: &str) -> Result<(), FragmentError> {
        let slot = self
            .containers
            .get_mut(&container_id(name))
            .ok_or_else(|| FragmentError::MissingContainer(name.to_string()))?;
        *slot = Some(html.to_string());
        Ok(())
    }
}

#[test]
fn one_failed_fetch_does_not_block_the_rest() {
    let config = PageConfig::default();
    let fetcher = FakeFetcher {
        broken: vec!["architecture"],
        requested: RefCell::new(Vec::new()),
    };
    let mut page = FakePage::with_containers(&config.sections);

    let report = block_on(load_fragments(
        &fetcher,
        &mut page,
        &config.sections,
        &config.fragment_dir,
    ));

    assert_eq!(fetcher.requested.borrow().len(), config.sections.len());
    assert_eq!(report.loaded(), config.sections.len() - 1);
    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "architecture");
    assert!(page.containers["architecture-container"].is_none());
    assert_eq!(
        page.containers["legal-container"].as_deref(),
        Some("<section>sections/legal.html</section>")
    );
}

#[test]
fn every_fragment_is_attempted_exactly_once_even_when_all_fail() {
    let names = ["overview", "impact"];
    let fetcher = FakeFetcher {
        broken: vec!["overview", "impact"],
        requested: RefCell::new(Vec::new()),
    };
    let mut page = FakePage::default();
    let report = block_on(load_fragments(&fetcher, &mut page, &names, "sections"));
    assert_eq!(
        *fetcher.requested.borrow(),
        vec!["sections/overview.html", "sections/impact.html"]
    );
    assert_eq!(report.loaded(), 0);
    assert_eq!(report.failures().count(), 2);
}

#[test]
fn missing_placeholder_is_skipped_not_failed() {
    let fetcher = FakeFetcher {
        broken: Vec::new(),
        requested: RefCell::new(Vec::new()),
    };
    let mut page = FakePage::with_containers(&["overview".to_string()]);
    let report = block_on(load_fragments(
        &fetcher,
        &mut page,
        &["overview", "legal"],
        "sections",
    ));
    assert_eq!(report.outcome("overview"), Some(&FragmentOutcome::Loaded));
    assert_eq!(report.outcome("legal"), Some(&FragmentOutcome::Skipped));
    assert_eq!(report.failures().count(), 0);
}
