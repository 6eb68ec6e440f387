// Accessibility helpers

use vetrina_core::menu::BODY_LOCK_CLASS;

/// Suppress or restore background scrolling while the menu overlays the page.
///
/// Adds or removes the scroll-lock class on `<body>`. Render targets without
/// a body are left untouched.
pub fn set_scroll_lock(locked: bool) {
    let Some(body) = crate::dom::body() else {
        return;
    };
    let _ = if locked {
        body.class_list().add_1(BODY_LOCK_CLASS)
    } else {
        body.class_list().remove_1(BODY_LOCK_CLASS)
    };
}
