//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`MediaEntry`], [`MediaKind`], [`ListingItem`] - Gallery items and their wire form
//! - [`GalleryLoadState`], [`Lightbox`] - Gallery view state
//! - [`MediaSource`] - Where the gallery listing comes from
//! - [`BiodataCategory`], [`BiodataField`], [`ContactLink`] - Static profile content

mod biodata;
mod gallery;
mod media;
mod source;

pub use biodata::{BiodataCategory, BiodataField, ContactKind, ContactLink};
pub use gallery::{ClickTarget, GalleryLoadState, Lightbox};
pub use media::{ListingItem, MediaEntry, MediaKind};
pub use source::MediaSource;
