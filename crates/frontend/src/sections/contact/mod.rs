pub mod api;
pub mod form;
pub mod info;

use contracts::enums::Section;
use leptos::prelude::*;

use crate::shared::config::SiteConfig;
use form::ContactFormPanel;
use info::ContactInfo;

#[component]
pub fn Contact(config: SiteConfig) -> impl IntoView {
    view! {
        <section id={Section::Contact.anchor_id()} class="contact">
            <div class="section-heading">
                <h2>"Let's Work Together"</h2>
                <p>
                    "Ready to bring your vision to life? Get in touch and let's discuss your next design project."
                </p>
            </div>
            <div class="contact__grid">
                <ContactInfo studio=config.studio />
                <ContactFormPanel config=config.contact_form />
            </div>
        </section>
    }
}
