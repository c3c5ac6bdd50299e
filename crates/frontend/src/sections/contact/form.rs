use contracts::domain::a002_contact_inquiry::{ContactForm, SubmissionState};
use contracts::enums::ProjectType;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::send_inquiry;
use crate::shared::config::ContactFormConfig;
use crate::shared::icons::icon;

/// "Start Your Project" form. Shows a thank-you panel after a successful
/// submission until the visitor chooses to send another inquiry.
#[component]
pub fn ContactFormPanel(config: ContactFormConfig) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new(config.subject.clone(), config.default_project()));
    let endpoint = StoredValue::new(config.endpoint.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let missing = form.with_untracked(|f| f.fields.missing_required());
        if !missing.is_empty() {
            log::debug!("Contact form incomplete: {:?}", missing);
            return;
        }

        let payload = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(payload)) => payload,
            Some(Err(rejected)) => {
                log::warn!("Contact submission rejected: {}", rejected);
                return;
            }
            None => return,
        };

        log::info!("Sending contact inquiry");
        let endpoint = endpoint.get_value();
        spawn_local(async move {
            let outcome = send_inquiry(&endpoint, &payload).await;
            match &outcome {
                Ok(()) => log::info!("Contact inquiry delivered"),
                Err(e) => log::error!("Contact inquiry failed: {}", e),
            }
            form.update(|f| f.complete(outcome));
        });
    };

    let state = move || form.with(|f| f.state());
    let submitting = move || state() == SubmissionState::Submitting;

    view! {
        <div class="contact-form">
            <h3>"Start Your Project"</h3>

            <Show
                when=move || state() == SubmissionState::Succeeded
                fallback=move || view! {
                    <form on:submit=on_submit>
                        <div class="contact-form__row">
                            <div class="field">
                                <label for="name">"Full Name"</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    placeholder="Your name"
                                    prop:value=move || form.with(|f| f.fields.name.clone())
                                    on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label for="email">"Email Address"</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    placeholder="your@email.com"
                                    prop:value=move || form.with(|f| f.fields.email.clone())
                                    on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
                                />
                            </div>
                        </div>

                        <div class="field">
                            <label for="project">"Project Type"</label>
                            <select
                                id="project"
                                name="project"
                                prop:value=move || form.with(|f| f.fields.project.code())
                                on:change=move |ev| {
                                    if let Some(project) = ProjectType::from_code(&event_target_value(&ev)) {
                                        form.update(|f| f.fields.project = project);
                                    }
                                }
                            >
                                {ProjectType::options()
                                    .into_iter()
                                    .map(|p| view! { <option value=p.code()>{p.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="field">
                            <label for="message">"Project Details"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                required
                                placeholder="Tell me about your project, timeline, and any specific requirements..."
                                prop:value=move || form.with(|f| f.fields.message.clone())
                                on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
                            ></textarea>
                        </div>

                        // hidden from people, bots tend to fill it
                        <input
                            type="text"
                            name="_gotcha"
                            class="contact-form__gotcha"
                            tabindex="-1"
                            autocomplete="off"
                            aria-hidden="true"
                            prop:value=move || form.with(|f| f.fields.honeypot.clone())
                            on:input=move |ev| form.update(|f| f.fields.honeypot = event_target_value(&ev))
                        />

                        <Show when=move || form.with(|f| f.last_error().is_some())>
                            <p class="contact-form__notice" role="status">
                                "Your message could not be sent. Please try again."
                            </p>
                        </Show>

                        <button type="submit" class="button button--primary" disabled=submitting>
                            {icon("send")}
                            <span>{move || if submitting() { "Sending..." } else { "Send Message" }}</span>
                        </button>
                    </form>
                }
            >
                <div class="contact-form__success">
                    <h4>"Thank you!"</h4>
                    <p>"Your message has been sent. I'll get back to you within 24 hours."</p>
                    <button
                        type="button"
                        class="button button--ghost"
                        on:click=move |_| form.update(|f| f.acknowledge())
                    >
                        "Send another"
                    </button>
                </div>
            </Show>
        </div>
    }
}
