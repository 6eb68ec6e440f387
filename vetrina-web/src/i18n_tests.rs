use crate::i18n::{current_lang, locales, set_lang, t};

#[test]
fn english_bundle_resolves_nested_keys() {
    set_lang("en");
    assert_eq!(t("nav.home"), "Showcase");
    assert_eq!(t("home.search_label"), "Search the showcase");
}

#[test]
fn switching_language_swaps_translations() {
    set_lang("it");
    assert_eq!(current_lang(), "it");
    assert_eq!(t("nav.stats"), "Statistiche");
    set_lang("en");
    assert_eq!(t("nav.stats"), "Statistics");
}

#[test]
fn missing_key_falls_back_to_the_key_itself() {
    set_lang("en");
    assert_eq!(t("nav.does_not_exist"), "nav.does_not_exist");
}

#[test]
fn unknown_language_keeps_the_current_bundle() {
    set_lang("en");
    set_lang("tlh");
    assert_eq!(current_lang(), "en");
}

#[test]
fn every_locale_carries_the_menu_toggle_label() {
    for meta in locales() {
        set_lang(meta.code);
        assert_ne!(t("nav.menu_toggle"), "nav.menu_toggle");
    }
    set_lang("en");
}
