//! Root application module.
//!
//! Composes the page sections in their fixed order (hero, biodata, gallery,
//! footer) inside an error boundary.

use leptos::error::Errors;
use leptos::{ev, prelude::*};

use crate::components::{BiodataSection, Footer, HeroSection, MediaGallery};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

/// Root application component with error boundary.
///
/// Sections own their state; nothing is shared at the root.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! { <CrashNotice errors=errors /> }>
            <main class=css::page>
                <HeroSection />
                <BiodataSection />
                <MediaGallery />
                <Footer />
            </main>
        </ErrorBoundary>
    }
}

/// Full-page fallback listing the errors that reached the boundary.
#[component]
fn CrashNotice(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = move |_: ev::MouseEvent| {
        if let Some(window) = dom::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::crash>
            <div class=css::crash_body>
                <h1 class=css::crash_title>"Something went wrong"</h1>
                <p class=css::crash_text>
                    "An unexpected error occurred. Please try reloading the page."
                </p>
                <details class=css::crash_details>
                    <summary>"Error details"</summary>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </details>
                <button class=css::reload on:click=reload>"Reload Page"</button>
            </div>
        </div>
    }
}
