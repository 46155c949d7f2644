//! Browser fetch and placement of section fragments
use pagespy_core::{FragmentError, FragmentFetcher, FragmentSink, container_id};
use wasm_bindgen_futures::JsFuture;
use web_sys::Document;

use crate::{dom, paths};

/// Fetches fragments with `window.fetch`.
pub struct WebFetcher;

impl FragmentFetcher for WebFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let response = dom::fetch_response(&paths::fragment_url(path))
            .await
            .map_err(|err| FragmentError::Network(dom::js_error_message(&err)))?;

        if !response.ok() {
            return Err(FragmentError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text_js = JsFuture::from(
            response
                .text()
                .map_err(|err| FragmentError::Network(dom::js_error_message(&err)))?,
        )
        .await
        .map_err(|err| FragmentError::Network(dom::js_error_message(&err)))?;

        text_js.as_string().ok_or(FragmentError::Utf8)
    }
}

/// Writes fragment markup into the `<name>-container` placeholders.
pub struct DomSink {
    document: Document,
}

impl DomSink {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FragmentSink for DomSink {
    fn place(&mut self, name: &str, html: &str) -> Result<(), FragmentError> {
        let container = self
            .document
            .get_element_by_id(&container_id(name))
            .ok_or_else(|| FragmentError::MissingContainer(name.to_string()))?;
        container.set_inner_html(html);
        Ok(())
    }
}
