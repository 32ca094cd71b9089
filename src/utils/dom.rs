//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlMediaElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Vertical position and height of an element relative to the viewport.
pub fn vertical_bounds(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.height())
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

// =============================================================================
// Media Playback
// =============================================================================

fn as_media(target: Option<EventTarget>) -> Option<HtmlMediaElement> {
    target?.dyn_into::<HtmlMediaElement>().ok()
}

/// Start playback of a media element event target.
///
/// Browsers may reject `play()` (autoplay policy); the rejection is only
/// logged.
pub fn play_media(target: Option<EventTarget>) {
    let Some(media) = as_media(target) else {
        return;
    };
    match media.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    tracing::debug!(reason = ?e, "media playback rejected");
                }
            });
        }
        Err(e) => tracing::debug!(reason = ?e, "media playback unavailable"),
    }
}

/// Pause a media element event target.
pub fn pause_media(target: Option<EventTarget>) {
    if let Some(media) = as_media(target) {
        if let Err(e) = media.pause() {
            tracing::debug!(reason = ?e, "media pause failed");
        }
    }
}
