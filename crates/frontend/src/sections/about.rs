use contracts::enums::Section;
use leptos::prelude::*;

use crate::shared::animated_counter::{AnimatedCounter, StatFigure};
use crate::shared::icons::icon_sized;

const STATS: &[(&str, &str, &str)] = &[
    ("award", "30+", "Projects Completed"),
    ("users", "20+", "Happy Clients"),
    ("percent", "50%", "Below Market Price"),
    ("zap", "5+", "Years Experience"),
];

/// Studio blurb and stats. Counters start once the visitor has scrolled
/// past the hero (`revealed`).
#[component]
pub fn About(#[prop(into)] revealed: Signal<bool>, studio_name: String) -> impl IntoView {
    let logo_alt = format!("{} Logo", studio_name);

    let stats = STATS
        .iter()
        .enumerate()
        .map(|(index, (icon_name, figure, label))| {
            let value = match StatFigure::parse(figure) {
                Some(stat) if stat.animated => view! {
                    <AnimatedCounter
                        end=stat.value
                        suffix=stat.suffix
                        delay_ms={index as u32 * 300}
                        duration_ms=2500
                        started=revealed
                    />
                }
                .into_any(),
                _ => view! { <span>{*figure}</span> }.into_any(),
            };
            view! {
                <div class="stat-card">
                    <div class="stat-card__icon">{icon_sized(icon_name, 32)}</div>
                    <h3 class="stat-card__value">{value}</h3>
                    <p class="stat-card__label">{*label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={Section::About.anchor_id()} class="about">
            <div class="section-heading">
                <h2>
                    <span>"About"</span>
                    <img src="assets/logo-dark.svg" alt=logo_alt class="about__logo" />
                </h2>
                <p>
                    "We are a dedicated design studio focused on crafting compelling visual experiences. \
                     From eye-catching posters and elegant menu designs to impactful signboards, memorable logos, \
                     and high-performing websites, we bring creativity, speed, and professionalism to every project."
                </p>
            </div>
            <div class="about__stats">{stats}</div>
        </section>
    }
}
