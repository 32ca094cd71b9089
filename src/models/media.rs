//! Media entries derived from a remote directory listing.

use serde::Deserialize;

use crate::utils::format::strip_extension;

/// Kind of media a gallery entry renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file name by its extension, case-insensitively.
    ///
    /// Returns `None` for anything the gallery does not display.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" => Some(Self::Image),
            "mp4" | "webm" | "mov" => Some(Self::Video),
            _ => None,
        }
    }
}

/// One item of the GitHub "contents" listing.
///
/// Only the fields the gallery reads are declared; the rest of the
/// response object is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingItem {
    pub name: String,
    /// Direct-fetch URL. `null` for sub-directories.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub sha: String,
}

/// A displayable gallery item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaEntry {
    pub name: String,
    pub download_url: String,
    pub kind: MediaKind,
    pub sha: String,
}

impl MediaEntry {
    /// Build an entry from a listing item, or `None` if the item is not a
    /// supported media file.
    pub fn from_listing(item: ListingItem) -> Option<Self> {
        let kind = MediaKind::from_name(&item.name)?;
        let download_url = item.download_url?;
        Some(Self {
            name: item.name,
            download_url,
            kind,
            sha: item.sha,
        })
    }

    /// Stable identity for keyed rendering: the blob `sha`.
    pub fn key(&self) -> &str {
        &self.sha
    }

    /// Caption text: the file name without its extension.
    pub fn display_name(&self) -> &str {
        strip_extension(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ListingItem {
        ListingItem {
            name: name.to_string(),
            download_url: Some(format!("https://raw.example/{name}")),
            sha: format!("sha-{name}"),
        }
    }

    #[test]
    fn test_kind_detection() {
        assert_eq!(MediaKind::from_name("a.jpg"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_name("a.JPEG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_name("A.PNG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_name("a.gif"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_name("a.webp"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_name("b.MP4"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_name("b.webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_name("b.MoV"), Some(MediaKind::Video));
    }

    #[test]
    fn test_unsupported_names() {
        assert_eq!(MediaKind::from_name("README.md"), None);
        assert_eq!(MediaKind::from_name("notes.svg"), None);
        assert_eq!(MediaKind::from_name("png"), None);
        assert_eq!(MediaKind::from_name("photo.png.txt"), None);
        assert_eq!(MediaKind::from_name(""), None);
    }

    #[test]
    fn test_from_listing_skips_directories() {
        let dir = ListingItem {
            name: "albums.png".to_string(),
            download_url: None,
            sha: "d".to_string(),
        };
        assert!(MediaEntry::from_listing(dir).is_none());
    }

    #[test]
    fn test_from_listing_keeps_fields() {
        let entry = MediaEntry::from_listing(item("trip.mov")).unwrap();
        assert_eq!(entry.kind, MediaKind::Video);
        assert_eq!(entry.download_url, "https://raw.example/trip.mov");
        assert_eq!(entry.sha, "sha-trip.mov");
        assert_eq!(entry.display_name(), "trip");
        assert_eq!(entry.key(), "sha-trip.mov");
    }

    #[test]
    fn test_bare_extension_has_empty_caption() {
        let entry = MediaEntry::from_listing(item(".png")).unwrap();
        assert_eq!(entry.kind, MediaKind::Image);
        assert_eq!(entry.display_name(), "");
    }

    #[test]
    fn test_listing_item_ignores_extra_fields() {
        let json = r#"{
            "name": "x.png",
            "path": "media/x.png",
            "sha": "abc",
            "size": 42,
            "type": "file",
            "download_url": "https://raw.example/x.png"
        }"#;
        let parsed: ListingItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "x.png");
        assert_eq!(parsed.sha, "abc");
        assert_eq!(parsed.download_url.as_deref(), Some("https://raw.example/x.png"));
    }
}
