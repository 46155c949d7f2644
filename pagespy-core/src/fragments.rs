//! Section fragment loading
//!
//! Fragments are fetched one after another, each exactly once. A failure is
//! recorded and logged and the loop moves on, so one broken section never
//! keeps the others (or feature setup) from running.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("No placeholder container for fragment {0}")]
    MissingContainer(String),
}

/// Fetches fragment markup by path.
#[allow(async_fn_in_trait)] // Browser fetches are not `Send`; callers stay on one thread.
pub trait FragmentFetcher {
    /// Fetch the markup at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status or an
    /// undecodable body.
    async fn fetch(&self, path: &str) -> Result<String, FragmentError>;
}

/// Places fetched markup into the page.
pub trait FragmentSink {
    /// Insert `html` into the placeholder for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::MissingContainer`] when the placeholder is absent.
    fn place(&mut self, name: &str, html: &str) -> Result<(), FragmentError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    Loaded,
    /// Fetched, but the page has no placeholder for it.
    Skipped,
    Failed(FragmentError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub outcomes: Vec<(String, FragmentOutcome)>,
}

impl LoadReport {
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, FragmentOutcome::Loaded))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &FragmentError)> {
        self.outcomes.iter().filter_map(|(name, o)| match o {
            FragmentOutcome::Failed(err) => Some((name.as_str(), err)),
            _ => None,
        })
    }

    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&FragmentOutcome> {
        self.outcomes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, o)| o)
    }
}

/// Relative path of a fragment, e.g. `sections/overview.html`.
#[must_use]
pub fn fragment_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        format!("{name}.html")
    } else {
        format!("{dir}/{name}.html")
    }
}

/// Id of the placeholder element a fragment is inserted into.
#[must_use]
pub fn container_id(name: &str) -> String {
    format!("{name}-container")
}

/// Load every named fragment into its placeholder.
#[allow(clippy::future_not_send)]
pub async fn load_fragments<F, S, K>(
    fetcher: &F,
    sink: &mut S,
    names: &[K],
    dir: &str,
) -> LoadReport
where
    F: FragmentFetcher + ?Sized,
    S: FragmentSink + ?Sized,
    K: AsRef<str>,
{
    let mut report = LoadReport::default();
    for name in names {
        let name = name.as_ref();
        let path = fragment_path(dir, name);
        let outcome = match fetcher.fetch(&path).await {
            Ok(html) => match sink.place(name, &html) {
                Ok(()) => FragmentOutcome::Loaded,
                Err(FragmentError::MissingContainer(_)) => {
                    log::debug!("No container for section {name}; fragment dropped");
                    FragmentOutcome::Skipped
                }
                Err(err) => {
                    log::warn!("Failed to place section {name}: {err}");
                    FragmentOutcome::Failed(err)
                }
            },
            Err(err) => {
                log::warn!("Failed to load section {name}: {err}");
                FragmentOutcome::Failed(err)
            }
        };
        report.outcomes.push((name.to_string(), outcome));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_container_ids() {
        assert_eq!(fragment_path("sections", "overview"), "sections/overview.html");
        assert_eq!(fragment_path("/sections/", "legal"), "sections/legal.html");
        assert_eq!(fragment_path("", "legal"), "legal.html");
        assert_eq!(container_id("impact"), "impact-container");
    }

    #[test]
    fn http_error_renders_status() {
        let err = FragmentError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
