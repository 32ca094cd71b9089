//! Media gallery loading.
//!
//! Turns one directory listing response into the gallery's settled
//! [`GalleryLoadState`]. The fetch itself is injected so the loader runs
//! the same way against the browser Fetch API and against test doubles.

use std::future::Future;

use crate::config::FEATURED_TILE_EVERY;
use crate::core::error::{FetchError, GalleryError};
use crate::models::{GalleryLoadState, ListingItem, MediaEntry, MediaSource};

/// Keep supported media files, in listing order.
pub fn collect_media(items: Vec<ListingItem>) -> Vec<MediaEntry> {
    items.into_iter().filter_map(MediaEntry::from_listing).collect()
}

/// Parse a listing body into gallery entries.
///
/// The body must be a JSON array of listing items; a single object (the
/// API's answer for a file path) is a parse error.
pub fn parse_listing(body: &str) -> Result<Vec<MediaEntry>, GalleryError> {
    let items: Vec<ListingItem> = serde_json::from_str(body)?;
    Ok(collect_media(items))
}

/// Load the gallery from `source`.
///
/// `fetch` is called exactly once with the listing URL. There is no retry:
/// whatever it returns settles the state.
pub async fn load_gallery<F, Fut>(source: &MediaSource, fetch: F) -> GalleryLoadState
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    let url = source.listing_url();
    tracing::info!(url = %url, "fetching media listing");

    let outcome = fetch(url)
        .await
        .map_err(GalleryError::from)
        .and_then(|body| parse_listing(&body));

    match &outcome {
        Ok(entries) => tracing::debug!(count = entries.len(), "media listing loaded"),
        Err(err) => tracing::warn!(error = %err, "media listing unavailable"),
    }

    GalleryLoadState::from_outcome(outcome)
}

/// Whether the tile at `index` is drawn double size.
///
/// Featured tiles only apply to wide layouts.
pub fn is_featured(index: usize, wide_layout: bool) -> bool {
    wide_layout && index % FEATURED_TILE_EVERY == 0
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::future::ready;

    use super::*;
    use crate::models::MediaKind;

    fn source() -> MediaSource {
        MediaSource::github("user", "repo", "media")
    }

    fn listing(names: &[&str]) -> String {
        let items: Vec<String> = names
            .iter()
            .map(|name| {
                format!(
                    r#"{{"name":"{name}","sha":"sha-{name}","type":"file","download_url":"https://raw.example/media/{name}"}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    // =========================================================================
    // Listing Parsing Tests
    // =========================================================================

    #[test]
    fn test_filters_to_supported_extensions() {
        let body = listing(&[
            "a.jpg", "notes.txt", "b.jpeg", "c.png", "README.md", "d.gif", "e.webp", "f.mp4",
            "g.webm", "h.mov", "i.svg",
        ]);
        let entries = parse_listing(&body).unwrap();
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().all(|e| e.name != "notes.txt" && e.name != "i.svg"));
    }

    #[test]
    fn test_case_insensitive_classification() {
        let entries = parse_listing(&listing(&["A.PNG", "b.MP4"])).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, MediaKind::Image);
        assert_eq!(entries[1].kind, MediaKind::Video);
    }

    #[test]
    fn test_preserves_listing_order() {
        let entries = parse_listing(&listing(&["z.png", "a.png", "m.mp4"])).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["z.png", "a.png", "m.mp4"]);
    }

    #[test]
    fn test_skips_directories() {
        let body = r#"[
            {"name":"album.png","sha":"1","type":"dir","download_url":null},
            {"name":"one.png","sha":"2","type":"file","download_url":"https://raw.example/one.png"}
        ]"#;
        let entries = parse_listing(body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "one.png");
    }

    #[test]
    fn test_object_body_is_parse_error() {
        let body = r#"{"name":"media","type":"file"}"#;
        assert!(matches!(
            parse_listing(body),
            Err(GalleryError::NetworkOrParse(_))
        ));
    }

    // =========================================================================
    // Loader Tests
    // =========================================================================

    #[tokio::test]
    async fn test_loaded_state() {
        let body = listing(&["a.png", "b.mp4", "c.txt"]);
        let state = load_gallery(&source(), |_| ready(Ok(body))).await;
        match state {
            GalleryLoadState::Loaded(entries) => assert_eq!(entries.len(), 2),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_state() {
        let body = listing(&["README.md", ".gitkeep"]);
        let state = load_gallery(&source(), |_| ready(Ok(body))).await;
        assert_eq!(state, GalleryLoadState::Empty);

        let state = load_gallery(&source(), |_| ready(Ok("[]".to_string()))).await;
        assert_eq!(state, GalleryLoadState::Empty);
    }

    #[tokio::test]
    async fn test_not_found_state() {
        let state = load_gallery(&source(), |_| ready(Err(FetchError::HttpError(404)))).await;
        assert_eq!(state, GalleryLoadState::Error(GalleryError::NotFound));
    }

    #[tokio::test]
    async fn test_http_status_state() {
        let state = load_gallery(&source(), |_| ready(Err(FetchError::HttpError(500)))).await;
        match state {
            GalleryLoadState::Error(err) => assert_eq!(err.to_string(), "GitHub API error: 500"),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_state() {
        let state = load_gallery(&source(), |_| ready(Ok("not json".to_string()))).await;
        assert!(matches!(
            state,
            GalleryLoadState::Error(GalleryError::NetworkOrParse(_))
        ));
    }

    #[tokio::test]
    async fn test_single_request_to_listing_url() {
        let calls = Cell::new(0);
        let requested = Cell::new(String::new());
        let state = load_gallery(&source(), |url| {
            calls.set(calls.get() + 1);
            requested.set(url);
            ready(Ok(listing(&["a.png"])))
        })
        .await;

        assert_eq!(calls.get(), 1);
        assert_eq!(
            requested.take(),
            "https://api.github.com/repos/user/repo/contents/media"
        );
        assert!(matches!(state, GalleryLoadState::Loaded(_)));
    }

    // =========================================================================
    // Layout Tests
    // =========================================================================

    #[test]
    fn test_featured_tiles() {
        let featured: Vec<usize> = (0..12).filter(|&i| is_featured(i, true)).collect();
        assert_eq!(featured, [0, 5, 10]);
        assert!(!is_featured(0, false));
    }
}
