//! Static biodata section.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{BIODATA, PROFILE_QUOTE};
use crate::models::BiodataCategory;

stylance::import_crate_style!(css, "src/components/biodata/biodata.module.css");

/// Full biodata: one card per category, then the closing quote.
#[component]
pub fn BiodataSection() -> impl IntoView {
    let (quote, translation) = PROFILE_QUOTE;

    view! {
        <section class=css::section>
            <div class=css::inner>
                <header class=css::header>
                    <span class=css::eyebrow>"Complete Profile"</span>
                    <h2 class=css::heading>"बायोडाटा"</h2>
                    <p class=css::subtitle>
                        "A detailed glimpse into life, values, and aspirations"
                    </p>
                </header>

                <div class=css::grid>
                    {BIODATA
                        .iter()
                        .map(|category| view! { <CategoryCard category=*category /> })
                        .collect_view()}
                </div>

                <blockquote class=css::quote>
                    <span class=css::quote_mark><Icon icon=ic::QUOTE /></span>
                    <p class=css::quote_text>{format!("\"{}\"", quote)}</p>
                    <p class=css::quote_translation>{translation}</p>
                </blockquote>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: BiodataCategory) -> impl IntoView {
    view! {
        <article class=css::card>
            <div class=css::card_header>
                <span class=css::card_icon>{category.icon}</span>
                <h3 class=css::card_title>{category.title}</h3>
            </div>
            <dl class=css::fields>
                {category
                    .fields
                    .iter()
                    .map(|field| view! {
                        <div class=css::field>
                            <dt class=css::label>{field.label}</dt>
                            <dd class=css::value>{field.value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </article>
    }
}
