//! Media gallery section.
//!
//! Loads the configured media folder listing once on mount and renders one
//! of four states: loading, grid, empty placeholder, or error card. Grid
//! tiles open a full-screen [`LightboxOverlay`].
//!
//! - [`grid`] - Tile grid with hover playback for videos
//! - [`lightbox`] - Full-screen single-item viewer
//! - [`notice`] - Loading, empty, and error placeholders

mod grid;
mod lightbox;
mod notice;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::configured_media_source;
use crate::core::load_gallery;
use crate::models::{ClickTarget, GalleryLoadState, Lightbox, MediaEntry};
use crate::utils::fetch_github;

use grid::GalleryGrid;
use lightbox::LightboxOverlay;
use notice::{GalleryNotice, LoadingNotice, NoticeKind};

stylance::import_crate_style!(css, "src/components/gallery/gallery.module.css");

// ============================================================================
// GalleryContext
// ============================================================================

/// Reactive state shared by the gallery's child components.
///
/// Provided by [`MediaGallery`]; scoped to the gallery subtree.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Listing load state for this page view.
    pub state: RwSignal<GalleryLoadState>,
    /// Lightbox selection.
    pub lightbox: RwSignal<Lightbox>,
}

impl GalleryContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(GalleryLoadState::Loading),
            lightbox: RwSignal::new(Lightbox::default()),
        }
    }

    /// Show `entry` full-screen, replacing any open item.
    pub fn open(&self, entry: MediaEntry) {
        self.lightbox.update(|l| l.open(entry));
    }

    /// Route a click inside the open lightbox.
    pub fn dismiss(&self, target: ClickTarget) {
        self.lightbox.update(|l| {
            l.dismiss_from(target);
        });
    }

    pub fn close(&self) {
        self.lightbox.update(Lightbox::close);
    }
}

impl Default for GalleryContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MediaGallery
// ============================================================================

/// Gallery section populated from the GitHub media folder.
#[component]
pub fn MediaGallery() -> impl IntoView {
    let ctx = GalleryContext::new();
    provide_context(ctx);

    let source = configured_media_source();
    let folder_url = source.folder_url();
    let folder_name = source.folder_name().to_string();

    // One request per mount. If the section is gone by the time the listing
    // arrives, the signal is disposed and the result is dropped.
    spawn_local(async move {
        let next = load_gallery(&source, fetch_github).await;
        match ctx.state.try_update(|state| state.settle(next)) {
            Some(true) => {}
            Some(false) => tracing::warn!("gallery state already settled"),
            None => tracing::debug!("gallery unmounted before listing arrived"),
        }
    });

    let is_open = Memo::new(move |_| ctx.lightbox.with(Lightbox::is_open));

    view! {
        <section class=css::section>
            <div class=css::inner>
                <header class=css::header>
                    <span class=css::eyebrow>"Explore More"</span>
                    <h2 class=css::heading>"Life & Interests"</h2>
                    <p class=css::subtitle>
                        "A visual journey through hobbies, travels, and memorable moments"
                    </p>
                </header>

                {move || match ctx.state.get() {
                    GalleryLoadState::Loading => view! { <LoadingNotice /> }.into_any(),
                    GalleryLoadState::Loaded(entries) => {
                        view! { <GalleryGrid entries=entries /> }.into_any()
                    }
                    GalleryLoadState::Empty => view! {
                        <GalleryNotice
                            kind=NoticeKind::Empty
                            folder_name=folder_name.clone()
                            folder_url=folder_url.clone()
                        />
                    }.into_any(),
                    GalleryLoadState::Error(err) => view! {
                        <GalleryNotice
                            kind=NoticeKind::Unavailable(err.to_string())
                            folder_name=folder_name.clone()
                            folder_url=folder_url.clone()
                        />
                    }.into_any(),
                }}

                <Show when=move || is_open.get()>
                    <LightboxOverlay />
                </Show>
            </div>
        </section>
    }
}
