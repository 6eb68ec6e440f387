use serde_json::Value;
use std::cell::RefCell;

/// Locale descriptor for the language picker.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
    LocaleMeta {
        code: "it",
        name: "Italiano",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("it", include_str!("../i18n/it.json")),
];

const STORAGE_KEY: &str = "vetrina.locale";

struct I18nBundle {
    lang: String,
    rtl: bool,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let rtl = LOCALE_META.iter().any(|meta| meta.code == lang && meta.rtl);

    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl,
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn saved_lang() -> String {
    crate::dom::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| "en".to_string())
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the DOM lang/dir
/// attributes. Persists the language choice for future sessions. Unknown
/// languages leave the current bundle in place.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));

    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        CURRENT.with(|cell| {
            let read = cell.borrow();
            let _ = el.set_attribute("lang", &read.lang);
            let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
        });
    }
    if let Some(storage) = crate::dom::window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, lang);
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Look up a translation for the current language.
///
/// Falls back to English, then to the key itself so a missing entry stays
/// visible in the UI instead of rendering nothing.
#[must_use]
pub fn t(key: &str) -> String {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        if let Some(text) = get_nested_value(&bundle.translations, key).and_then(Value::as_str) {
            return text.to_string();
        }
        if let Some(text) = get_nested_value(&bundle.fallback, key).and_then(Value::as_str) {
            return text.to_string();
        }
        log::warn!("missing translation key: {key}");
        key.to_string()
    })
}
