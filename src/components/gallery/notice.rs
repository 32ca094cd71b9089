//! Gallery placeholders shown instead of the grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

/// Which placeholder to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Listing loaded but holds no supported media.
    Empty,
    /// Listing could not be loaded; carries the reason.
    Unavailable(String),
}

/// Spinner shown while the listing request is in flight.
#[component]
pub fn LoadingNotice() -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <div class=css::spinner />
            <p class=css::muted>"Loading gallery..."</p>
        </div>
    }
}

/// Card for the empty and error states.
///
/// Both point the visitor at the media folder that feeds the gallery.
#[component]
pub fn GalleryNotice(kind: NoticeKind, folder_name: String, folder_url: String) -> impl IntoView {
    let folder_link = view! {
        <a class=css::folder href=folder_url target="_blank" rel="noopener noreferrer">
            {folder_name}
        </a>
    };

    match kind {
        NoticeKind::Empty => view! {
            <div class=css::notice>
                <span class=css::notice_icon><Icon icon=ic::IMAGE /></span>
                <h3 class=css::notice_title>"No Media Yet"</h3>
                <p class=css::muted>
                    "Add photos and videos to the " {folder_link} " folder to showcase here."
                </p>
            </div>
        }
        .into_any(),
        NoticeKind::Unavailable(reason) => view! {
            <div class=css::notice role="alert">
                <span class=css::notice_icon><Icon icon=ic::CAMERA /></span>
                <h3 class=css::notice_title>"Gallery Coming Soon"</h3>
                <p class=css::muted>{reason}</p>
                <p class=css::hint>
                    "Add images and videos to the " {folder_link}
                    " folder in the GitHub repository to populate this gallery."
                </p>
            </div>
        }
        .into_any(),
    }
}
