use crate::i18n::t;
use crate::paths::asset_path;
use vetrina_core::catalog::Catalog;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Catalog,
    pub id: u32,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

/// Detail view for a single jersey.
#[function_component(JerseyDetail)]
pub fn jersey_detail(p: &Props) -> Html {
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let Some(jersey) = p.catalog.get(p.id) else {
        return html! {
            <section class="jersey-detail" aria-live="assertive">
                <p>{ t("jersey.missing") }</p>
                <button type="button" onclick={back}>{ t("jersey.back") }</button>
            </section>
        };
    };

    html! {
        <article class="jersey-detail">
            <h1>{ format!("{} - {}", jersey.team, jersey.player) }</h1>
            <img
                src={asset_path(&jersey.photo)}
                alt={format!("{} - {}", jersey.team, jersey.player)}
            />
            <dl>
                <dt>{ t("jersey.season") }</dt>
                <dd>{ jersey.season.clone() }</dd>
                { jersey.estimated_value.map(|value| html! {
                    <>
                        <dt>{ t("jersey.value") }</dt>
                        <dd>{ format!("€ {value:.2}") }</dd>
                    </>
                }).unwrap_or_default() }
            </dl>
            { jersey.notes.as_ref().map(|notes| html! {
                <p class="jersey-notes">{ notes.clone() }</p>
            }).unwrap_or_default() }
            <button type="button" onclick={back}>{ t("jersey.back") }</button>
        </article>
    }
}
