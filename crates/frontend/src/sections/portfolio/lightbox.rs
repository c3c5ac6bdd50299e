use contracts::domain::a001_portfolio_item::PortfolioItem;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;

/// Full-size preview of a portfolio item. Closes on backdrop click, the close
/// button, or Escape.
#[component]
pub fn Lightbox(item: RwSignal<Option<PortfolioItem>>) -> impl IntoView {
    let close = move || item.set(None);

    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && item.with_untracked(|i| i.is_some()) {
            close();
        }
    });

    view! {
        {move || {
            item.get()
                .map(|opened| {
                    view! {
                        <div class="lightbox" on:click=move |_| close()>
                            <div class="lightbox__frame" on:click=|ev| ev.stop_propagation()>
                                <button class="lightbox__close" aria-label="Close" on:click=move |_| close()>
                                    {icon_sized("close", 20)}
                                </button>
                                <img src=opened.image alt=opened.title />
                            </div>
                        </div>
                    }
                })
        }}
    }
}
