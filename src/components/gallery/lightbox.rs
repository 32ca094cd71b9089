//! Full-screen viewer for one gallery entry.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::{GalleryContext, css};
use crate::components::icons as ic;
use crate::models::{ClickTarget, MediaEntry, MediaKind};

/// Overlay showing the selected entry.
///
/// Closes on a backdrop click, the close button, or `Escape`. Clicks on the
/// media itself never reach the backdrop.
#[component]
pub fn LightboxOverlay() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let on_backdrop = move |ev: ev::MouseEvent| {
        ctx.dismiss(ClickTarget::from_backdrop_click(ev.target(), ev.current_target()));
    };

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.dismiss(ClickTarget::CloseControl);
    };

    let on_keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ctx.close();
        }
    });
    on_cleanup(move || on_keydown.remove());

    let selected = Memo::new(move |_| ctx.lightbox.with(|l| l.selected().cloned()));

    view! {
        <div class=css::lightbox role="dialog" aria-modal="true" on:click=on_backdrop>
            <div
                class=css::lightbox_frame
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {move || selected.get().map(|entry| view! { <LightboxMedia entry=entry /> })}

                <button
                    class=css::close_button
                    on:click=on_close
                    title="Close (Esc)"
                    aria-label="Close viewer"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </div>
    }
}

#[component]
fn LightboxMedia(entry: MediaEntry) -> impl IntoView {
    let MediaEntry {
        name,
        download_url,
        kind,
        ..
    } = entry;

    match kind {
        MediaKind::Image => view! {
            <img src=download_url alt=name class=css::lightbox_media />
        }
        .into_any(),
        MediaKind::Video => view! {
            <video
                src=download_url
                class=css::lightbox_media
                controls=true
                autoplay=true
                playsinline=true
            />
        }
        .into_any(),
    }
}
