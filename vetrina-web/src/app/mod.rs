#[cfg(target_arch = "wasm32")]
use crate::components::footer::Footer;
#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
#[cfg(target_arch = "wasm32")]
use crate::pages::dashboard::Dashboard;
#[cfg(target_arch = "wasm32")]
use crate::pages::home::Home;
#[cfg(target_arch = "wasm32")]
use crate::pages::jersey::JerseyDetail;
#[cfg(target_arch = "wasm32")]
use crate::pages::not_found::NotFound;
#[cfg(target_arch = "wasm32")]
use crate::pages::stats::Stats;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let catalog = (*app_state.catalog).clone();

    let on_select = {
        let navigator = navigator.clone();
        Callback::from(move |id: u32| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Jersey { id });
            }
        })
    };
    let go_home = {
        let navigator = navigator;
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };
    let on_lang_change = {
        let lang = app_state.lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    let render = {
        move |route: Route| -> Html {
            match route {
                Route::Home => html! {
                    <Home catalog={catalog.clone()} on_select={on_select.clone()} />
                },
                Route::Jersey { id } => html! {
                    <JerseyDetail catalog={catalog.clone()} {id} on_back={go_home.clone()} />
                },
                Route::Dashboard => html! { <Dashboard catalog={catalog.clone()} /> },
                Route::Stats => html! { <Stats catalog={catalog.clone()} /> },
                Route::NotFound => html! { <NotFound on_go_home={go_home.clone()} /> },
            }
        }
    };

    html! {
        <>
            <Header current_lang={(*app_state.lang).clone()} on_lang_change={on_lang_change} />
            <main id="main" role="main">
                <Switch<Route> render={render} />
            </main>
            <Footer />
        </>
    }
}
