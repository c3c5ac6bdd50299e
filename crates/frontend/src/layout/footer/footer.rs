use leptos::prelude::*;

use crate::shared::dom;
use crate::shared::icons::{icon, icon_sized};

#[component]
pub fn Footer(studio_name: String) -> impl IntoView {
    let year = dom::current_year();
    let copyright = format!("© {} {}. All rights reserved.", year, studio_name);
    let made_by = format!("by {}", studio_name);

    view! {
        <footer data-zone="footer" class="footer">
            <button class="footer__to-top" aria-label="Back to top" on:click=move |_| dom::scroll_to_top()>
                {icon_sized("arrow-up", 24)}
            </button>

            <div class="footer__cta">
                <h3>"Let's Create Something Amazing"</h3>
                <p>"Ready to bring your vision to life? Let's discuss your next design project."</p>
            </div>

            <div class="footer__bottom">
                <div class="footer__made-with">
                    <span>"Made with"</span>
                    <span class="footer__heart">{icon("heart")}</span>
                    <span>{made_by}</span>
                </div>
                <p class="footer__copyright">{copyright}</p>
            </div>
        </footer>
    }
}
