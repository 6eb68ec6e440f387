use crate::i18n::t;
use vetrina_core::catalog::Catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Catalog,
}

/// Collector's dashboard: the whole collection, public or not.
#[function_component(Dashboard)]
pub fn dashboard(p: &Props) -> Html {
    let total = p.catalog.jerseys.len();
    let showcased = p.catalog.showcased().count();

    html! {
        <section class="dashboard">
            <h1>{ t("dashboard.title") }</h1>
            <p class="dashboard-counts">
                { format!("{}: {total} · {}: {showcased}", t("dashboard.total"), t("dashboard.showcased")) }
            </p>
            <table>
                <thead>
                    <tr>
                        <th>{ t("dashboard.col_team") }</th>
                        <th>{ t("dashboard.col_player") }</th>
                        <th>{ t("dashboard.col_season") }</th>
                        <th>{ t("dashboard.col_public") }</th>
                    </tr>
                </thead>
                <tbody>
                    { for p.catalog.jerseys.iter().map(|jersey| html! {
                        <tr key={jersey.id.to_string()}>
                            <td>{ jersey.team.clone() }</td>
                            <td>{ jersey.player.clone() }</td>
                            <td>{ jersey.season.clone() }</td>
                            <td>{ if jersey.showcased { t("dashboard.yes") } else { t("dashboard.no") } }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
