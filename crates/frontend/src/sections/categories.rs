use contracts::enums::{Category, Section};
use leptos::prelude::*;

use crate::shared::icons::icon_sized;
use crate::shared::portfolio_assets::CATALOG;

/// Keys that activate a focused `role="button"` element
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Service cards; clicking one filters the portfolio to that category
#[component]
pub fn Categories(
    #[prop(into)] on_select: Callback<Category>,
    #[prop(into)] on_navigate: Callback<Section>,
) -> impl IntoView {
    let cards = Category::all()
        .into_iter()
        .enumerate()
        .map(|(index, category)| {
            let count = CATALOG.count(category);
            view! {
                <div
                    class={format!("category-card category-card--{}", index)}
                    role="button"
                    tabindex="0"
                    on:click=move |_| on_select.run(category)
                    on:keydown=move |ev| {
                        if is_activation_key(&ev.key()) {
                            // space would scroll the page otherwise
                            ev.prevent_default();
                            on_select.run(category);
                        }
                    }
                >
                    <div class="category-card__icon">{icon_sized(category.code(), 24)}</div>
                    <div class="category-card__body">
                        <h3>{category.display_name()}</h3>
                        <p>{category.description()}</p>
                    </div>
                    <div class="category-card__count">
                        <span>{count}</span>
                        " works"
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={Section::Categories.anchor_id()} class="categories">
            <div class="section-heading">
                <h2>"Our Design Services"</h2>
                <p>
                    "Explore our diverse portfolio across different design categories. \
                     Click any category to view featured work."
                </p>
            </div>
            <div class="categories__grid">{cards}</div>

            <div class="categories__cta">
                <p>"Can't find what you're looking for? We also take on custom projects."</p>
                <button
                    type="button"
                    class="button button--outline-gold"
                    on:click=move |_| on_navigate.run(Section::Contact)
                >
                    "Contact Us for Custom Work"
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
        assert!(!is_activation_key(""));
    }
}
