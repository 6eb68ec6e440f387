use vetrina_core::catalog::Catalog;
use yew::prelude::*;

/// State handles shared by the app shell and the bootstrap effect.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub catalog: UseStateHandle<Catalog>,
    pub lang: UseStateHandle<String>,
    pub boot_ready: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(Catalog::default),
        lang: use_state(crate::i18n::current_lang),
        boot_ready: use_state(|| false),
    }
}
