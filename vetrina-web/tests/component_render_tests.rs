use futures::executor::block_on;
use vetrina_core::menu::{GLYPH_CLOSED, MenuState};
use vetrina_web::components::footer::Footer;
use vetrina_web::components::header::Header;
use yew::{Callback, LocalServerRenderer};

#[test]
fn header_renders_toggle_panel_and_language_picker() {
    vetrina_web::i18n::set_lang("en");
    let props = vetrina_web::components::header::Props {
        current_lang: "en".to_string(),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("mobile-menu-toggle"));
    assert!(html.contains("navbar-menu"));
    assert!(html.contains("lang-select"));
    assert!(html.contains("Showcase"));
    assert!(html.contains("Dashboard"));
    assert!(html.contains("Statistics"));
}

#[test]
fn header_starts_closed_with_collapsed_aria_and_hamburger() {
    vetrina_web::i18n::set_lang("en");
    let props = vetrina_web::components::header::Props {
        current_lang: "en".to_string(),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains(GLYPH_CLOSED));
    assert!(!html.contains("is-open"));
    assert!(!html.contains("is-active"));

    // The closed markup matches what one click would invert.
    let view = MenuState::default().view();
    assert!(!view.panel_open);
    assert_eq!(view.glyph, GLYPH_CLOSED);
}

#[test]
fn header_localizes_navigation_labels() {
    vetrina_web::i18n::set_lang("it");
    let props = vetrina_web::components::header::Props {
        current_lang: "it".to_string(),
        on_lang_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Statistiche"));
    vetrina_web::i18n::set_lang("en");
}

#[test]
fn footer_renders_copy() {
    vetrina_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer>"));
    assert!(html.contains("Vetrina"));
}
