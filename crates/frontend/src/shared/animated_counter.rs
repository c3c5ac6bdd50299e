//! Count-up animation for the stats figures.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FRAME_MS: u32 = 16;

/// A stats figure such as `"30+"`, `"24h"` or `"50%"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFigure {
    pub value: u32,
    pub suffix: String,
    /// Percentages are shown as-is, without counting
    pub animated: bool,
}

impl StatFigure {
    /// Leading digits become the value, the rest the suffix.
    /// Returns `None` when the text does not start with a digit.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits_end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        let value = text[..digits_end].parse().ok()?;
        let suffix = text[digits_end..].to_string();
        Some(Self {
            value,
            animated: !suffix.contains('%'),
            suffix,
        })
    }
}

/// Ease-out quartic: fast start, slow finish
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Counter value after `elapsed_ms` of an animation towards `end`
pub fn counter_value(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).max(0.0);
    (f64::from(end) * ease_out_quart(progress)).floor() as u32
}

/// Counts from 0 up to `end` once `started` turns true.
#[component]
pub fn AnimatedCounter(
    end: u32,
    #[prop(into, default = String::new())] suffix: String,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(default = 2000)] duration_ms: u32,
    #[prop(into)] started: Signal<bool>,
) -> impl IntoView {
    let count = RwSignal::new(0u32);
    let running = StoredValue::new(false);

    Effect::new(move |_| {
        if !started.get() || running.get_value() {
            return;
        }
        running.set_value(true);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let start = js_sys::Date::now();
            loop {
                let elapsed = js_sys::Date::now() - start;
                let value = counter_value(end, elapsed, f64::from(duration_ms));
                count.set(value);
                if elapsed >= f64::from(duration_ms) {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    view! {
        <span class="counter">
            {move || count.get()}
            {suffix}
        </span>
    }
}
