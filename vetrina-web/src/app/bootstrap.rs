#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use once_cell::sync::Lazy;
#[cfg(any(target_arch = "wasm32", test))]
use vetrina_core::catalog::Catalog;
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
static EMBEDDED_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_json(include_str!("../../static/assets/data/jerseys.json")).unwrap_or_else(
        |err| {
            log::warn!("embedded catalog failed to decode: {err}");
            Catalog::default()
        },
    )
});

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    catalog: UseStateHandle<Catalog>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        catalog: app_state.catalog.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load(handles: &BootstrapHandles) {
    handles.catalog.set(EMBEDDED_CATALOG.clone());
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}
