//! UI components built with Leptos.
//!
//! - [`hero`] - Scroll-driven hero with welcome, photo, and preview layers
//! - [`biodata`] - Static biodata cards and closing quote
//! - [`gallery`] - GitHub-backed media grid and lightbox
//! - [`footer`] - Contact links and copyright
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod biodata;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icons;

pub use biodata::BiodataSection;
pub use footer::Footer;
pub use gallery::MediaGallery;
pub use hero::HeroSection;
