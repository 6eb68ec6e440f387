use crate::i18n::t;
use crate::paths::asset_path;
use vetrina_core::catalog::{self, Catalog, Jersey, PER_PAGE, SortSpec};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Catalog,
    #[prop_or_default]
    pub on_select: Callback<u32>,
}

/// Public showcase: searchable, sortable, paginated grid of the jerseys
/// marked public.
#[function_component(Home)]
pub fn home(p: &Props) -> Html {
    let query = use_state(String::new);
    let sort_field = use_state(|| SortSpec::DEFAULT.as_field());
    let page_no = use_state(|| 1_usize);

    let spec = SortSpec::parse(sort_field.as_str()).unwrap_or(SortSpec::DEFAULT);
    let showcased: Vec<&Jersey> = p.catalog.showcased().collect();
    let mut visible = catalog::search(&showcased, query.as_str());
    catalog::sort(&mut visible, spec);
    let page = catalog::page(visible.len(), *page_no, PER_PAGE);
    let entries = &visible[page.start..page.end];

    let on_query = {
        let query = query.clone();
        let page_no = page_no.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
                page_no.set(1);
            }
        })
    };
    let on_sort = {
        let sort_field = sort_field.clone();
        let page_no = page_no.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
                sort_field.set(sel.value());
                page_no.set(1);
            }
        })
    };
    let prev = {
        let page_no = page_no.clone();
        let current = page.current;
        Callback::from(move |_: MouseEvent| page_no.set(current.saturating_sub(1).max(1)))
    };
    let next = {
        let page_no = page_no.clone();
        let current = page.current;
        let total = page.total;
        Callback::from(move |_: MouseEvent| page_no.set((current + 1).min(total)))
    };

    let grid = if entries.is_empty() {
        html! { <p class="showcase-empty">{ t("home.empty") }</p> }
    } else {
        html! {
            <>
                <ul class="showcase-grid">
                    { for entries.iter().map(|jersey| {
                        let id = jersey.id;
                        let on_select = p.on_select.clone();
                        html! {
                            <li class="jersey-card" key={id.to_string()}>
                                <button type="button" onclick={Callback::from(move |_: MouseEvent| on_select.emit(id))}>
                                    <img
                                        src={asset_path(&jersey.photo)}
                                        alt={format!("{} - {}", jersey.team, jersey.player)}
                                    />
                                    <span class="jersey-team">{ jersey.team.clone() }</span>
                                    <span class="jersey-player">{ jersey.player.clone() }</span>
                                    <span class="jersey-season">{ jersey.season.clone() }</span>
                                </button>
                            </li>
                        }
                    }) }
                </ul>
                <nav class="pager" aria-label={t("home.pager")}>
                    <button type="button" onclick={prev} disabled={page.current == 1}>
                        { t("home.prev") }
                    </button>
                    <span class="pager-status">{ format!("{} / {}", page.current, page.total) }</span>
                    <button type="button" onclick={next} disabled={page.current == page.total}>
                        { t("home.next") }
                    </button>
                </nav>
            </>
        }
    };

    html! {
        <section class="showcase">
            <h1>{ t("home.title") }</h1>
            <form
                class="showcase-controls"
                role="search"
                onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}
            >
                <label for="showcase-search">{ t("home.search_label") }</label>
                <input
                    id="showcase-search"
                    type="search"
                    value={(*query).clone()}
                    oninput={on_query}
                    placeholder={t("home.search_placeholder")}
                />
                <label for="showcase-sort">{ t("home.sort_label") }</label>
                <select id="showcase-sort" value={(*sort_field).clone()} onchange={on_sort}>
                    <option value="-season">{ t("sort.season_desc") }</option>
                    <option value="season">{ t("sort.season_asc") }</option>
                    <option value="team">{ t("sort.team") }</option>
                    <option value="player">{ t("sort.player") }</option>
                    <option value="-added">{ t("sort.newest") }</option>
                </select>
            </form>
            { grid }
        </section>
    }
}
