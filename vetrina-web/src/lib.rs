#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod menu;
pub mod pages;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ensure <html lang, dir> are set at startup according to saved locale
    crate::i18n::set_lang(&crate::i18n::current_lang());
    let Some(doc) = dom::document() else {
        return;
    };
    if let Some(root) = doc.get_element_by_id("app") {
        yew::Renderer::<app::App>::with_root(root).render();
    } else {
        // Server-rendered page without the SPA mount point: wire the static
        // navbar markup directly.
        let _ = menu::bind(&doc);
    }
}
