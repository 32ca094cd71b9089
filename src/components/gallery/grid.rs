//! Gallery tile grid.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use leptos_use::use_media_query;

use super::{GalleryContext, css};
use crate::components::icons as ic;
use crate::config::DESKTOP_MEDIA_QUERY;
use crate::core::is_featured;
use crate::models::{MediaEntry, MediaKind};
use crate::utils::dom;

/// Grid of media tiles in listing order, keyed by blob sha.
#[component]
pub fn GalleryGrid(entries: Vec<MediaEntry>) -> impl IntoView {
    let wide = use_media_query(DESKTOP_MEDIA_QUERY.to_string());

    view! {
        <div class=css::grid>
            <For
                each=move || entries.clone().into_iter().enumerate()
                key=|(_, entry)| entry.key().to_string()
                children=move |(index, entry)| {
                    view! { <Tile entry=entry index=index wide=wide /> }
                }
            />
        </div>
    }
}

/// A single clickable tile.
///
/// Videos are muted and looping; they play while hovered.
#[component]
fn Tile(entry: MediaEntry, index: usize, wide: Signal<bool>) -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");

    let class = move || {
        if is_featured(index, wide.get()) {
            format!("{} {}", css::tile, css::featured)
        } else {
            css::tile.to_string()
        }
    };

    let caption = entry.display_name().to_string();
    let url = entry.download_url.clone();

    let media = match entry.kind {
        MediaKind::Image => view! {
            <img src=url alt=caption.clone() class=css::tile_media loading="lazy" />
        }
        .into_any(),
        MediaKind::Video => view! {
            <video
                src=url
                class=css::tile_media
                muted=true
                prop:muted=true
                loop=true
                playsinline=true
                preload="metadata"
                on:mouseenter=|ev: ev::MouseEvent| dom::play_media(ev.target())
                on:mouseleave=|ev: ev::MouseEvent| dom::pause_media(ev.target())
            />
            <div class=css::play_badge>
                <span class=css::play_icon><Icon icon=ic::PLAY /></span>
            </div>
        }
        .into_any(),
    };

    view! {
        <figure class=class on:click=move |_| ctx.open(entry.clone())>
            <div class=css::tile_frame>{media}</div>
            <figcaption class=css::caption>
                <p class=css::caption_text>{caption}</p>
            </figcaption>
        </figure>
    }
}
