use leptos::prelude::*;

use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::config::StudioConfig;
use crate::shared::icons::{icon, icon_sized};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

const COPIED_INDICATOR_MS: u32 = 2000;

/// `https://wa.me/<number>?text=<prefill>` chat link
pub fn whatsapp_link(number: &str, prefill: &str) -> String {
    let number: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if prefill.is_empty() {
        format!("https://wa.me/{}", number)
    } else {
        format!("https://wa.me/{}?text={}", number, urlencoding::encode(prefill))
    }
}

/// Email, phone (with copy and WhatsApp shortcuts) and location
#[component]
pub fn ContactInfo(studio: StudioConfig) -> impl IntoView {
    let copied = RwSignal::new(false);
    let phone_dial = studio.phone_dial.clone();

    let copy_phone = move |_: leptos::ev::MouseEvent| {
        copy_to_clipboard_with_callback(&phone_dial, move || {
            copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(COPIED_INDICATOR_MS).await;
                copied.set(false);
            });
        });
    };

    let mailto = format!("mailto:{}", studio.email);
    let tel = format!("tel:{}", studio.phone_dial);
    let whatsapp = whatsapp_link(&studio.whatsapp_number, &studio.whatsapp_prefill);

    view! {
        <div class="contact-info">
            <h3>"Get in Touch"</h3>

            <a class="contact-info__row" href=mailto>
                <span class="contact-info__icon">{icon_sized("mail", 24)}</span>
                <div>
                    <h4>"Email"</h4>
                    <p>{studio.email.clone()}</p>
                </div>
            </a>

            <div class="contact-info__row">
                <a class="contact-info__icon" href=tel>{icon_sized("phone", 24)}</a>
                <div>
                    <h4>"Phone"</h4>
                    <p>
                        <span>{studio.phone_display.clone()}</span>
                        <button type="button" class="contact-info__copy" aria-label="Copy phone number" on:click=copy_phone>
                            {move || if copied.get() { icon_sized("check", 14) } else { icon_sized("copy", 14) }}
                        </button>
                    </p>
                </div>
                <a
                    class="contact-info__whatsapp"
                    href=whatsapp
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Chat on WhatsApp"
                >
                    {icon("message")}
                </a>
            </div>

            <div class="contact-info__row">
                <span class="contact-info__icon">{icon_sized("signboard", 24)}</span>
                <div>
                    <h4>"Location"</h4>
                    <p>{studio.location.clone()}</p>
                </div>
            </div>

            <div class="contact-info__note">
                {icon_sized("message", 24)}
                <p>
                    "I typically respond to all inquiries within 24 hours. For urgent projects, \
                     feel free to call or text me directly."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_prefill() {
        assert_eq!(
            whatsapp_link("601123325311", "Hi there, a poster / menu?"),
            "https://wa.me/601123325311?text=Hi%20there%2C%20a%20poster%20%2F%20menu%3F"
        );
    }

    #[test]
    fn test_whatsapp_link_strips_formatting() {
        assert_eq!(whatsapp_link("+60 11-2332 5311", ""), "https://wa.me/601123325311");
    }
}
