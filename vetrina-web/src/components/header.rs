use crate::a11y;
use crate::i18n::{self, t};
use vetrina_core::menu::{BUTTON_ACTIVE_CLASS, MenuState, PANEL_OPEN_CLASS};
use vetrina_core::nav::NAV_ITEMS;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    #[prop_or_default]
    pub on_lang_change: Callback<String>,
}

/// Site header: brand, mobile menu toggle, navigation panel, language picker.
///
/// The menu carries a single open/closed boolean; panel class, button class,
/// `aria-expanded` and the glyph are all projected from it, so they cannot
/// drift apart.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let menu = use_state(MenuState::default);
    let view = menu.view();

    {
        // The body sits outside this component's subtree, so the scroll lock
        // is applied as an effect of the open flag rather than rendered.
        use_effect_with(view.scroll_locked, |locked| {
            a11y::set_scroll_lock(*locked);
            || {}
        });
    }

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let on_lang = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                i18n::set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };

    let button_class = classes!(
        "mobile-menu-toggle",
        view.button_active.then_some(BUTTON_ACTIVE_CLASS)
    );
    let panel_class = classes!("navbar-menu", view.panel_open.then_some(PANEL_OPEN_CLASS));

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <a class="navbar-brand" href="/">{ t("brand") }</a>
                <button
                    type="button"
                    class={button_class}
                    aria-expanded={view.aria_expanded}
                    aria-controls="navbar-menu"
                    aria-label={t("nav.menu_toggle")}
                    onclick={toggle}
                >
                    { view.glyph }
                </button>
                <nav id="navbar-menu" class={panel_class} aria-label={t("nav.primary")}>
                    <ul>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li key={item.href}><a href={item.href}>{ t(item.key) }</a></li>
                        }) }
                    </ul>
                </nav>
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <select id="lang-select" onchange={on_lang} value={p.current_lang.clone()} aria-label={t("nav.language")}>
                    { for i18n::locales().iter().map(|meta| html! {
                        <option value={meta.code}>{ meta.name }</option>
                    }) }
                </select>
            </div>
        </header>
    }
}
