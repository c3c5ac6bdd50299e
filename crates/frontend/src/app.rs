use contracts::enums::{Category, Section};
use leptos::prelude::*;

use crate::layout::{Footer, Header, SiteContext};
use crate::sections::{About, Categories, Contact, Hero, Portfolio};
use crate::shared::config::load_config_or_default;

/// Root coordinator: owns the page state and wires read-only projections
/// and mutator callbacks into the sections.
#[component]
pub fn App() -> impl IntoView {
    let config = load_config_or_default();
    let site = SiteContext::new(config.navigation.scroll_lookahead);

    site.init_query_integration();

    let _ = window_event_listener(leptos::ev::scroll, move |_| site.sync_with_scroll());

    let active_section = site.active_section();
    let selected_category = site.selected_category();
    let on_navigate = Callback::new(move |section: Section| site.navigate(section));
    let on_select_category = Callback::new(move |category: Category| site.select_category(category));
    let about_revealed = Signal::derive(move || active_section.get() != Section::Home);

    view! {
        <div class="site">
            <Header
                active_section=active_section
                on_navigate=on_navigate
                studio_name=config.studio.name.clone()
                condense_threshold=config.navigation.header_condense_threshold
            />

            <main>
                <Hero on_navigate=on_navigate />
                <About revealed=about_revealed studio_name=config.studio.name.clone() />
                <Categories on_select=on_select_category on_navigate=on_navigate />
                <Portfolio
                    selected_category=selected_category
                    preview_limit=config.portfolio.preview_limit
                />
                <Contact config=config.clone() />
            </main>

            <Footer studio_name=config.studio.name.clone() />
        </div>
    }
}
