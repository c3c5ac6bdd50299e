use contracts::enums::Section;
use contracts::shared::navigation::header_condensed;
use leptos::prelude::*;

use super::mobile_menu::MobileMenu;
use crate::shared::dom;
use crate::shared::icons::icon;

/// Fixed top bar: logo, section menu and the "Contact Us" button.
/// Collapses into a floating bar once the page is scrolled.
#[component]
pub fn Header(
    #[prop(into)] active_section: Signal<Section>,
    #[prop(into)] on_navigate: Callback<Section>,
    studio_name: String,
    condense_threshold: f64,
) -> impl IntoView {
    let is_scrolled = RwSignal::new(header_condensed(dom::scroll_y(), condense_threshold));
    let mobile_open = RwSignal::new(false);

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let condensed = header_condensed(dom::scroll_y(), condense_threshold);
        if condensed != is_scrolled.get_untracked() {
            is_scrolled.set(condensed);
        }
    });

    let navigate = move |section: Section| {
        mobile_open.set(false);
        on_navigate.run(section);
    };

    let logo_src = move || {
        if is_scrolled.get() {
            "assets/logo-dark.svg"
        } else {
            "assets/logo.svg"
        }
    };
    let logo_alt = format!("{} Logo", studio_name);

    view! {
        <header data-zone="header" class="header" class:header-condensed=move || is_scrolled.get()>
            <div class="header__bar">
                <button class="header__logo" on:click=move |_| navigate(Section::Home)>
                    <img src=logo_src alt=logo_alt draggable="false" />
                </button>

                <nav class="header__nav">
                    {Section::menu()
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="header__nav-item"
                                    class:header__nav-item-active=move || active_section.get() == section
                                    on:click=move |_| navigate(section)
                                >
                                    {section.nav_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <button class="button button--contact" on:click=move |_| navigate(Section::Contact)>
                    <span>"Contact Us"</span>
                </button>

                <button
                    class="header__burger"
                    aria-label="Toggle menu"
                    on:click=move |_| mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open.get() { icon("close") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || mobile_open.get()>
                <MobileMenu active_section=active_section on_navigate=Callback::new(navigate) />
            </Show>
        </header>
    }
}
