//! Browser global accessors.
//!
//! Every lookup is optional: on a non-browser target, or in a page missing
//! the expected structure, they return `None` and callers degrade to a
//! no-op instead of panicking.

use web_sys::{Document, HtmlElement, Window};

/// The global `window`, when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// The document behind [`window`].
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The document body, once parsed.
#[must_use]
pub fn body() -> Option<HtmlElement> {
    document().and_then(|doc| doc.body())
}
