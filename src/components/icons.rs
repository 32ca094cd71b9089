//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as ArrowDown, LuCamera as Camera, LuExternalLink as ExternalLink,
        LuImage as Image, LuMail as Mail, LuPhone as Phone, LuPlay as Play, LuQuote as Quote,
        LuUser as User, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowDown as ArrowDown, BsBoxArrowUpRight as ExternalLink, BsCamera as Camera,
        BsEnvelope as Mail, BsImage as Image, BsPerson as User, BsPlayFill as Play,
        BsQuote as Quote, BsTelephone as Phone, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_DOWN, ArrowDown);
themed_icon!(CAMERA, Camera);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(IMAGE, Image);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(PLAY, Play);
themed_icon!(QUOTE, Quote);
themed_icon!(USER, User);
