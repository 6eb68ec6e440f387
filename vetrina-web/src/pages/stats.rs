use crate::i18n::t;
use vetrina_core::catalog;
use vetrina_core::catalog::Catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Catalog,
}

/// Aggregate numbers for the whole collection.
#[function_component(Stats)]
pub fn stats(p: &Props) -> Html {
    let stats = catalog::stats(&p.catalog.jerseys);

    html! {
        <section class="stats">
            <h1>{ t("stats.title") }</h1>
            <dl>
                <dt>{ t("stats.total") }</dt>
                <dd>{ stats.total }</dd>
                <dt>{ t("stats.showcased") }</dt>
                <dd>{ stats.showcased }</dd>
                <dt>{ t("stats.value") }</dt>
                <dd>{ format!("€ {:.2}", stats.estimated_total) }</dd>
            </dl>
            <h2>{ t("stats.top_teams") }</h2>
            <ol class="stats-teams">
                { for stats.top_teams.iter().map(|(team, count)| html! {
                    <li key={team.clone()}>{ format!("{team} ({count})") }</li>
                }) }
            </ol>
        </section>
    }
}
