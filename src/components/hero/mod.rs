//! Scroll-driven hero section.
//!
//! A tall section with a sticky viewport-sized stage. Scrolling through the
//! section drives three layers (welcome text, photo, biodata preview)
//! through [`HeroFrame`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{HERO_SCROLL_VH, PROFILE_LOOKING_FOR, PROFILE_NAME, PROFILE_TAGLINE};
use crate::core::{HeroFrame, scroll_progress};
use crate::utils::dom;
use crate::utils::format::initials;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

/// Hero section with scroll-linked layer animation.
#[component]
pub fn HeroSection() -> impl IntoView {
    let section_ref = NodeRef::<leptos::html::Section>::new();
    let (progress, set_progress) = signal(0.0_f64);
    let frame = Memo::new(move |_| HeroFrame::at(progress.get()));

    let measure = move || {
        if let Some(section) = section_ref.get_untracked() {
            let (top, height) = dom::vertical_bounds(&section);
            set_progress.set(scroll_progress(top, height));
        }
    };

    // Initial measurement once the section is in the DOM (page may load scrolled)
    Effect::new(move || {
        if section_ref.get().is_some() {
            measure();
        }
    });

    let on_scroll = window_event_listener(ev::scroll, move |_| measure());
    let on_resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    view! {
        <section
            node_ref=section_ref
            class=css::hero
            style=format!("min-height: {}vh;", HERO_SCROLL_VH)
        >
            <div class=css::stage>
                <div class=css::backdrop aria-hidden="true">
                    <div class=css::glow_primary />
                    <div class=css::glow_teal />
                    <div class=css::ring_inner />
                    <div class=css::ring_outer />
                </div>

                <WelcomeText frame=frame />
                <Portrait frame=frame />
                <BiodataPreview frame=frame />
            </div>
        </section>
    }
}

#[component]
fn WelcomeText(frame: Memo<HeroFrame>) -> impl IntoView {
    view! {
        <div class=css::welcome style=move || frame.get().welcome.style()>
            <div class=css::welcome_content>
                <p class=css::eyebrow>"Welcome to"</p>
                <h1 class=css::title>{PROFILE_NAME}</h1>
                <p class=css::tagline>{PROFILE_TAGLINE}</p>
                <div class=css::scroll_hint>
                    <span class=css::bounce><Icon icon=ic::ARROW_DOWN /></span>
                    <span class=css::scroll_text>"Scroll to explore"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Portrait(frame: Memo<HeroFrame>) -> impl IntoView {
    view! {
        <div class=css::photo style=move || frame.get().photo.style()>
            <div class=css::photo_glow />
            // Placeholder until a real portrait is added
            <div class=css::photo_frame>
                <span class=css::initials>{initials(PROFILE_NAME)}</span>
            </div>
            <div class=css::photo_ring />
        </div>
    }
}

#[component]
fn BiodataPreview(frame: Memo<HeroFrame>) -> impl IntoView {
    view! {
        <div class=css::preview style=move || frame.get().preview.style()>
            <div class=css::card>
                <h2 class=css::card_title>
                    <Icon icon=ic::USER />
                    "Biodata"
                </h2>
                <ul class=css::card_rows>
                    <li class=css::card_row>
                        <span class=css::dot />
                        <span class=css::row_label>"Name:"</span>
                        <span class=css::row_value>{PROFILE_NAME}</span>
                    </li>
                    <li class=css::card_row>
                        <span class=css::dot />
                        <span class=css::row_label>"Looking for:"</span>
                        <span class=css::row_value>{PROFILE_LOOKING_FOR}</span>
                    </li>
                </ul>
                <p class=css::card_hint>"↓ Scroll for complete details"</p>
            </div>
        </div>
    }
}
