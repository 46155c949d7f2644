#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod dom;
pub mod fragments;
pub mod geometry;
pub mod ids;
pub mod logging;
pub mod page;
pub mod paths;
pub mod prefs;
pub mod render;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    // Fragments must be in the DOM before any feature looks its elements up
    dom::on_content_ready(|| {
        wasm_bindgen_futures::spawn_local(async {
            let config = pagespy_core::PageConfig::load_from_static();
            page::boot(config).await;
        });
    });
}
