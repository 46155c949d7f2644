//! Dark mode wiring
use std::cell::RefCell;
use std::rc::Rc;

use pagespy_core::{PageConfig, Theme, ThemeController};

use crate::prefs::LocalStoragePreferences;
use crate::{dom, ids};

const DARK_CLASS: &str = "dark";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the platform asks for a dark color scheme.
#[must_use]
pub fn ambient_prefers_dark() -> bool {
    dom::window()
        .and_then(|win| win.match_media(DARK_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Set or clear the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    let Some(root) = dom::document().and_then(|doc| doc.document_element()) else {
        return;
    };
    let list = root.class_list();
    let _ = if theme.is_dark() {
        list.add_1(DARK_CLASS)
    } else {
        list.remove_1(DARK_CLASS)
    };
}

/// Apply the stored or ambient theme and hook up the toggle control.
pub fn install(config: &PageConfig) -> Theme {
    let mut controller = ThemeController::new(LocalStoragePreferences::new(), &config.theme_key);
    let theme = controller.initialize(ambient_prefers_dark());
    apply(theme);

    let Some(toggle) = dom::element(ids::THEME_TOGGLE) else {
        log::debug!("No #{} on the page; theme toggle disabled", ids::THEME_TOGGLE);
        return theme;
    };
    let controller = Rc::new(RefCell::new(controller));
    let result = dom::listen(toggle.as_ref(), "click", move |_| {
        let next = controller.borrow_mut().toggle();
        apply(next);
    });
    if let Err(err) = result {
        log::warn!("Cannot attach theme toggle: {}", dom::js_error_message(&err));
    }
    theme
}
