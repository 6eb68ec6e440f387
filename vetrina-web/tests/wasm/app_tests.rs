use wasm_bindgen_test::*;
use yew::Renderer;

use vetrina_web::app::App;
use vetrina_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    // Default language must be set to populate translated header strings.
    vetrina_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(
        skip.get_attribute("href").unwrap_or_default(),
        "#main",
        "skip link must target the main landmark"
    );
}

#[wasm_bindgen_test]
fn app_header_renders_collapsed_toggle() {
    render_app();
    let doc = dom::document().expect("document");
    let toggle = doc
        .query_selector(".mobile-menu-toggle")
        .expect("query toggle")
        .expect("toggle exists");
    assert_eq!(
        toggle.get_attribute("aria-expanded").unwrap_or_default(),
        "false"
    );
    assert_eq!(
        toggle.get_attribute("aria-controls").unwrap_or_default(),
        "navbar-menu"
    );
    let panel = doc
        .query_selector(".navbar-menu")
        .expect("query panel")
        .expect("panel exists");
    assert!(!panel.class_list().contains("is-open"));
}
