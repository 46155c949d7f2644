use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, Response, ScrollBehavior,
    ScrollIntoViewOptions, Storage, Window,
};

/// Retrieve the global `window` object, `None` outside a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id. Missing elements are not an error.
#[must_use]
pub fn element(id: &str) -> Option<Element> {
    document().and_then(|doc| doc.get_element_by_id(id))
}

/// Look up an element by id as an `HtmlElement`.
#[must_use]
pub fn html_element(id: &str) -> Option<HtmlElement> {
    element(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the browser rejects the listener.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` once the initial HTML has been parsed.
pub fn on_content_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    let result = listen(doc.as_ref(), "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    });
    if let Err(err) = result {
        log::error!("Cannot wait for DOMContentLoaded: {}", js_error_message(&err));
    }
}

/// Smoothly scroll the element with `id` into view. Fire-and-forget.
pub fn scroll_into_view(id: &str) {
    if let Some(el) = element(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Add every class in `on` and remove every class in `off`.
pub fn swap_classes(el: &Element, on: &[&str], off: &[&str]) {
    let list = el.class_list();
    for class in off {
        let _ = list.remove_1(class);
    }
    for class in on {
        let _ = list.add_1(class);
    }
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
