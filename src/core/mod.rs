//! Core logic, independent of the view layer.
//!
//! This module provides:
//! - [`gallery`] listing parsing and the [`load_gallery`] loader
//! - [`hero`] scroll progress to [`HeroFrame`] mapping
//! - [`error`] error types

pub mod error;
pub mod gallery;
pub mod hero;

pub use gallery::{is_featured, load_gallery};
pub use hero::{HeroFrame, scroll_progress};
