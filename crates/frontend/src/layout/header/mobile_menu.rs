use contracts::enums::Section;
use leptos::prelude::*;

/// Drop-down section list shown on narrow screens
#[component]
pub fn MobileMenu(
    #[prop(into)] active_section: Signal<Section>,
    #[prop(into)] on_navigate: Callback<Section>,
) -> impl IntoView {
    view! {
        <nav class="mobile-menu">
            {Section::menu()
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class="mobile-menu__item"
                            class:mobile-menu__item-active=move || active_section.get() == section
                            on:click=move |_| on_navigate.run(section)
                        >
                            {section.nav_label()}
                        </button>
                    }
                })
                .collect_view()}
            <button class="button button--contact" on:click=move |_| on_navigate.run(Section::Contact)>
                "Contact Us"
            </button>
        </nav>
    }
}
