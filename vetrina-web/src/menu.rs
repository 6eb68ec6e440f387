//! Click wiring for server-rendered navbar markup.
//!
//! Pages that ship the navbar as static markup (no SPA mount point) get the
//! same toggle behavior as the Yew header: each click flips the panel, the
//! body scroll lock and the button's active class, mirrors the new state
//! into `aria-expanded` and swaps the button glyph.

use vetrina_core::menu::{
    BODY_LOCK_CLASS, BUTTON_ACTIVE_CLASS, GLYPH_CLOSED, GLYPH_OPEN, PANEL_OPEN_CLASS,
    aria_expanded_value, is_expanded,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

/// Selector for the navbar toggle button.
pub const TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
/// Selector for the collapsible menu panel.
pub const PANEL_SELECTOR: &str = ".navbar-menu";

/// Attach the toggle behavior to pre-existing markup.
///
/// Looks up the toggle button and the menu panel. When either is missing the
/// page simply has no mobile menu, so nothing is bound, nothing is mutated
/// and nothing is reported. Returns whether a listener was attached; the
/// listener lives for the rest of the page's life.
pub fn bind(document: &Document) -> bool {
    let Ok(Some(button)) = document.query_selector(TOGGLE_SELECTOR) else {
        return false;
    };
    let Ok(Some(panel)) = document.query_selector(PANEL_SELECTOR) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };

    let handler = {
        let button = button.clone();
        Closure::<dyn FnMut()>::new(move || {
            let expanded = is_expanded(button.get_attribute("aria-expanded").as_deref());

            let _ = panel.class_list().toggle(PANEL_OPEN_CLASS);
            let _ = body.class_list().toggle(BODY_LOCK_CLASS);
            let _ = button.class_list().toggle(BUTTON_ACTIVE_CLASS);
            let _ = button.set_attribute("aria-expanded", aria_expanded_value(!expanded));

            // Glyph follows the panel's post-toggle state.
            let open = panel.class_list().contains(PANEL_OPEN_CLASS);
            button.set_text_content(Some(if open { GLYPH_OPEN } else { GLYPH_CLOSED }));
        })
    };
    if button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_err()
    {
        return false;
    }
    handler.forget();
    true
}
