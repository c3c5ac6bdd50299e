//! Clipboard utilities for the contact details
//!
//! Wraps the async Web Clipboard API so a click handler can copy the studio
//! phone number and flip a "Copied!" hint once the browser confirms the write.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the clipboard with a callback on success
///
/// The write runs on the local executor; `on_success` is only called after
/// the browser resolves the clipboard promise. A rejected write (no
/// permission, insecure context) is logged and the callback is dropped.
///
/// # Example
/// ```rust,ignore
/// let copied = RwSignal::new(false);
/// copy_to_clipboard_with_callback("+601123325311", move || copied.set(true));
/// ```
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::warn!("Clipboard write failed: {:?}", e),
        }
    });
}
