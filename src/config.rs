//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! including the compiled-in profile content.

use crate::models::{BiodataCategory, BiodataField, ContactKind, ContactLink, MediaSource};

// =============================================================================
// Profile Metadata
// =============================================================================

/// Full name shown in the hero, preview card, and footer.
pub const PROFILE_NAME: &str = "Vaibhav Kadam";

/// Line under the name in the hero.
pub const PROFILE_TAGLINE: &str = "A journey of traditions, dreams & connections";

/// "Looking for" value on the hero preview card.
pub const PROFILE_LOOKING_FOR: &str = "Life Partner";

/// Closing quote of the biodata section: (original, translation).
pub const PROFILE_QUOTE: (&str, &str) = (
    "संस्कार, शिक्षण आणि प्रेमाच्या पायावर कुटुंब निर्माण करायचे आहे",
    "Looking to build a family on the foundation of values, education, and love",
);

// =============================================================================
// Biodata
// =============================================================================

pub const BIODATA: &[BiodataCategory] = &[
    BiodataCategory {
        title: "Personal Details",
        icon: "👤",
        fields: &[
            BiodataField::new("नाव (Name)", "वैभव कदम (Vaibhav Kadam)"),
            BiodataField::new("वय (Age)", "28 वर्षे"),
            BiodataField::new("उंची (Height)", "5'8\" (173 cm)"),
            BiodataField::new("जन्मतारीख (Date of Birth)", "15 मार्च 1996"),
            BiodataField::new("जन्मवेळ (Birth Time)", "सकाळी 6:30"),
            BiodataField::new("जन्मस्थान (Birth Place)", "पुणे, महाराष्ट्र"),
        ],
    },
    BiodataCategory {
        title: "Education & Career",
        icon: "🎓",
        fields: &[
            BiodataField::new("शिक्षण (Education)", "B.Tech Computer Science"),
            BiodataField::new("व्यवसाय (Occupation)", "Software Engineer"),
            BiodataField::new("कंपनी (Company)", "Leading Tech Company"),
            BiodataField::new("वार्षिक उत्पन्न (Annual Income)", "Respectable"),
        ],
    },
    BiodataCategory {
        title: "Family Background",
        icon: "👨‍👩‍👦",
        fields: &[
            BiodataField::new("वडिलांचे नाव (Father)", "श्री. [Name] कदम"),
            BiodataField::new("वडिलांचा व्यवसाय", "[Occupation]"),
            BiodataField::new("आईचे नाव (Mother)", "सौ. [Name] कदम"),
            BiodataField::new("आईचा व्यवसाय", "गृहिणी / [Occupation]"),
            BiodataField::new("भाऊ-बहीण (Siblings)", "[Details]"),
        ],
    },
    BiodataCategory {
        title: "Gotra & Kul",
        icon: "🕉️",
        fields: &[
            BiodataField::new("गोत्र (Gotra)", "[Gotra Name]"),
            BiodataField::new("कुलदैवत (Kuldaivat)", "[Deity Name]"),
            BiodataField::new("राशी (Rashi)", "मीन (Pisces)"),
            BiodataField::new("नक्षत्र (Nakshatra)", "रेवती"),
        ],
    },
    BiodataCategory {
        title: "Expectations",
        icon: "💫",
        fields: &[
            BiodataField::new("अपेक्षा (Expectations)", "Educated, family-oriented partner"),
            BiodataField::new("वयोमर्यादा (Age Range)", "24-28 वर्षे"),
            BiodataField::new("शिक्षण (Education)", "Graduate / Post Graduate"),
        ],
    },
];

// =============================================================================
// Contact Links
// =============================================================================

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        target: "vaibhav.kadam@example.com",
        kind: ContactKind::Email,
    },
    ContactLink {
        label: "Phone",
        target: "+91 90000 00000",
        kind: ContactKind::Phone,
    },
    ContactLink {
        label: "GitHub",
        target: "https://github.com/pratikh6i/vaibhavkadam-funbiodata",
        kind: ContactKind::Web,
    },
];

// =============================================================================
// Network Configuration
// =============================================================================

/// GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// `Accept` header requesting the v3 JSON representation.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Directory the gallery lists.
///
/// To point the gallery elsewhere, change the owner, repository, or folder:
/// ```ignore
/// MediaSource::github("someone", "photos", "albums/2024")
/// ```
pub fn configured_media_source() -> MediaSource {
    MediaSource::github("pratikh6i", "vaibhavkadam-funbiodata", "media")
}

// =============================================================================
// Layout Configuration
// =============================================================================

/// Every n-th gallery tile (starting with the first) is drawn double size.
pub const FEATURED_TILE_EVERY: usize = 5;

/// Media query for layouts wide enough to show featured tiles.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Height of the hero scroll region in viewport heights.
pub const HERO_SCROLL_VH: u32 = 300;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biodata_is_populated() {
        assert_eq!(BIODATA.len(), 5);
        assert!(BIODATA.iter().all(|c| !c.fields.is_empty()));
        assert!(
            BIODATA
                .iter()
                .flat_map(|c| c.fields)
                .all(|f| !f.label.is_empty() && !f.value.is_empty())
        );
    }

    #[test]
    fn test_media_source_endpoint() {
        assert_eq!(
            configured_media_source().listing_url(),
            "https://api.github.com/repos/pratikh6i/vaibhavkadam-funbiodata/contents/media"
        );
    }
}
