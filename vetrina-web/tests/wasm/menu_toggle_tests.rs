use vetrina_core::menu::{
    BODY_LOCK_CLASS, BUTTON_ACTIVE_CLASS, GLYPH_CLOSED, GLYPH_OPEN, PANEL_OPEN_CLASS,
};
use vetrina_web::menu::bind;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    vetrina_web::dom::document().expect("document")
}

fn body() -> HtmlElement {
    document().body().expect("body")
}

/// Rebuild the navbar markup from scratch, dropping listeners bound by
/// earlier tests along with their elements.
fn install_markup(with_panel: bool, aria: Option<&str>) -> (Element, Option<Element>) {
    let doc = document();
    let body = body();
    body.set_inner_html("");
    let _ = body.class_list().remove_1(BODY_LOCK_CLASS);

    let button = doc.create_element("button").expect("create button");
    button.set_class_name("mobile-menu-toggle");
    if let Some(value) = aria {
        button.set_attribute("aria-expanded", value).expect("set aria");
    }
    button.set_text_content(Some(GLYPH_CLOSED));
    body.append_child(&button).expect("append button");

    let panel = if with_panel {
        let nav = doc.create_element("nav").expect("create nav");
        nav.set_class_name("navbar-menu");
        body.append_child(&nav).expect("append nav");
        Some(nav)
    } else {
        None
    };
    (button, panel)
}

fn click(el: &Element) {
    el.clone()
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

#[wasm_bindgen_test]
fn click_opens_everything_in_lockstep() {
    let (button, panel) = install_markup(true, Some("false"));
    let panel = panel.expect("panel installed");
    assert!(bind(&document()));

    click(&button);

    assert!(panel.class_list().contains(PANEL_OPEN_CLASS));
    assert!(body().class_list().contains(BODY_LOCK_CLASS));
    assert!(button.class_list().contains(BUTTON_ACTIVE_CLASS));
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(button.text_content().as_deref(), Some(GLYPH_OPEN));
}

#[wasm_bindgen_test]
fn second_click_restores_the_initial_state() {
    let (button, panel) = install_markup(true, Some("false"));
    let panel = panel.expect("panel installed");
    assert!(bind(&document()));

    click(&button);
    click(&button);

    assert!(!panel.class_list().contains(PANEL_OPEN_CLASS));
    assert!(!body().class_list().contains(BODY_LOCK_CLASS));
    assert!(!button.class_list().contains(BUTTON_ACTIVE_CLASS));
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(button.text_content().as_deref(), Some(GLYPH_CLOSED));
}

#[wasm_bindgen_test]
fn missing_panel_means_no_binding_and_no_mutation() {
    let (button, _) = install_markup(false, Some("false"));
    assert!(!bind(&document()));

    click(&button);

    assert!(!button.class_list().contains(BUTTON_ACTIVE_CLASS));
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(button.text_content().as_deref(), Some(GLYPH_CLOSED));
    assert!(!body().class_list().contains(BODY_LOCK_CLASS));
}

#[wasm_bindgen_test]
fn missing_button_means_no_binding() {
    let doc = document();
    body().set_inner_html("");
    let nav = doc.create_element("nav").expect("create nav");
    nav.set_class_name("navbar-menu");
    body().append_child(&nav).expect("append nav");

    assert!(!bind(&doc));
    assert!(!nav.class_list().contains(PANEL_OPEN_CLASS));
}

#[wasm_bindgen_test]
fn absent_aria_attribute_reads_as_collapsed() {
    let (button, panel) = install_markup(true, None);
    let panel = panel.expect("panel installed");
    assert!(bind(&document()));

    click(&button);

    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(panel.class_list().contains(PANEL_OPEN_CLASS));
}

#[wasm_bindgen_test]
fn garbage_aria_value_reads_as_collapsed() {
    let (button, panel) = install_markup(true, Some("maybe"));
    panel.expect("panel installed");
    assert!(bind(&document()));

    click(&button);

    // Any value other than the literal "true" negates to open.
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
}
