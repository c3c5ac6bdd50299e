pub mod lightbox;

use contracts::domain::a001_portfolio_item::PortfolioItem;
use contracts::enums::{Category, Section};
use contracts::projections::p900_portfolio_view::PortfolioView;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;
use crate::shared::portfolio_assets::CATALOG;
use lightbox::Lightbox;

/// Portfolio grid filtered by the selected category, with a "Show More"
/// toggle and a lightbox for the clicked item.
#[component]
pub fn Portfolio(
    #[prop(into)] selected_category: Signal<Option<Category>>,
    preview_limit: usize,
) -> impl IntoView {
    let view_state = RwSignal::new(PortfolioView::new(preview_limit));
    let opened = RwSignal::new(None::<PortfolioItem>);

    Effect::new(move |_| {
        let category = selected_category.get();
        view_state.maybe_update(|v| v.sync_category(category));
    });

    let visible_items = move || {
        view_state.with(|v| {
            v.visible(&CATALOG)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let has_more = move || view_state.with(|v| v.has_more(&CATALOG));
    let expanded = move || view_state.with(|v| v.is_expanded());

    view! {
        <section id={Section::Portfolio.anchor_id()} class="portfolio">
            <div class="section-heading">
                <h2>{move || view_state.with(|v| v.heading())}</h2>
                <p>{move || view_state.with(|v| v.blurb())}</p>
            </div>

            <div class="portfolio__grid">
                <For
                    each=visible_items
                    key=|item| item.id
                    children=move |item| {
                        let PortfolioItem { title, category, image, .. } = item.clone();
                        view! {
                            <div class="portfolio-card" on:click=move |_| opened.set(Some(item.clone()))>
                                <div class="portfolio-card__image">
                                    <img src=image alt=title.clone() loading="lazy" />
                                    <div class="portfolio-card__overlay">{icon_sized("eye", 22)}</div>
                                </div>
                                <div class="portfolio-card__meta">
                                    <h3>{title}</h3>
                                    <span class="portfolio-card__tag">{category.code()}</span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || CATALOG.is_empty()>
                <p class="portfolio__empty">"New work is on its way."</p>
            </Show>

            <Show when=has_more>
                <div class="portfolio__more">
                    <button class="button button--primary" on:click=move |_| view_state.update(|v| v.toggle_expanded())>
                        {move || if expanded() { "Show Less" } else { "Show More" }}
                    </button>
                </div>
            </Show>

            <Lightbox item=opened />
        </section>
    }
}
