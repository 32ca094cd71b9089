//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch_github`] - GitHub REST fetching with timeout
//! - [`dom`] - Browser API helpers (bounds, media playback, clock)
//! - [`format`] - Display formatting helpers

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::fetch_github;
