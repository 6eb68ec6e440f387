use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/jersey/:id")]
    Jersey { id: u32 },
    #[at("/dashboard")]
    Dashboard,
    #[at("/stats")]
    Stats,
    #[at("/404")]
    #[not_found]
    NotFound,
}
