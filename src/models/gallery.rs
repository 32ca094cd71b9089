//! Gallery load state and lightbox selection.

use crate::core::error::GalleryError;

use super::MediaEntry;

/// Load state of the media gallery for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GalleryLoadState {
    #[default]
    Loading,
    Loaded(Vec<MediaEntry>),
    Empty,
    Error(GalleryError),
}

impl GalleryLoadState {
    /// Build the settled state for a load outcome.
    pub fn from_outcome(outcome: Result<Vec<MediaEntry>, GalleryError>) -> Self {
        match outcome {
            Ok(entries) if entries.is_empty() => Self::Empty,
            Ok(entries) => Self::Loaded(entries),
            Err(err) => Self::Error(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Move from `Loading` to `next`.
    ///
    /// Returns `false` and leaves the state untouched if it already settled
    /// or if `next` is `Loading` itself.
    pub fn settle(&mut self, next: GalleryLoadState) -> bool {
        if !self.is_loading() || next.is_loading() {
            return false;
        }
        *self = next;
        true
    }
}

/// Where a click inside the open lightbox landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the media.
    Backdrop,
    /// The close button.
    CloseControl,
    /// The enlarged image or video, or anything inside its frame.
    Media,
}

impl ClickTarget {
    /// Classify a click handled on the lightbox backdrop.
    ///
    /// Only a click whose target is the backdrop element itself dismisses;
    /// anything that bubbled up from a descendant counts as `Media`.
    pub fn from_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> Self {
        match (target, current_target) {
            (Some(target), Some(current)) if target == current => Self::Backdrop,
            _ => Self::Media,
        }
    }
}

/// Full-screen viewer state: closed, or open on exactly one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<MediaEntry>,
}

impl Lightbox {
    /// Show `entry`, replacing any current selection.
    pub fn open(&mut self, entry: MediaEntry) {
        self.selected = Some(entry);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Close if the click landed on a dismissing target.
    ///
    /// Returns `true` if the lightbox was closed by this click.
    pub fn dismiss_from(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&MediaEntry> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
