use contracts::enums::Section;
use leptos::prelude::*;

use crate::shared::animated_counter::AnimatedCounter;
use crate::shared::icons::icon;

#[component]
pub fn Hero(#[prop(into)] on_navigate: Callback<Section>) -> impl IntoView {
    let started = Signal::stored(true);

    view! {
        <section id={Section::Home.anchor_id()} class="hero">
            <div class="hero__content">
                <div class="hero__badges">
                    <span class="badge">{icon("award")}"Top Rated"</span>
                    <span class="badge">{icon("star")}"5.0 Rating"</span>
                </div>

                <h1 class="hero__title">
                    "The #1 design studio to create "
                    <span class="hero__accent">"visual impact"</span>
                </h1>
                <p class="hero__lead">
                    "From concept to completion, we specialize in poster design, menu creation, signboards, \
                     logos, and websites. Professional design solutions that bring your vision to life."
                </p>

                <div class="hero__stats">
                    <div class="hero__stat">
                        <AnimatedCounter end=30 suffix="+" delay_ms=800 started=started />
                        <div class="hero__stat-label">"Projects"</div>
                    </div>
                    <div class="hero__stat">
                        <AnimatedCounter end=98 suffix="%" delay_ms=1000 started=started />
                        <div class="hero__stat-label">"Satisfaction"</div>
                    </div>
                    <div class="hero__stat">
                        <AnimatedCounter end=24 suffix="h" delay_ms=1200 started=started />
                        <div class="hero__stat-label">"Response"</div>
                    </div>
                </div>

                <div class="hero__actions">
                    <button
                        class="button button--primary"
                        aria-label="Go to Contact section"
                        on:click=move |_| on_navigate.run(Section::Contact)
                    >
                        "Start Your Project"
                    </button>
                    <button
                        class="button button--ghost"
                        aria-label="Go to Services section"
                        on:click=move |_| on_navigate.run(Section::Categories)
                    >
                        "View Portfolio"
                    </button>
                </div>
            </div>
        </section>
    }
}
