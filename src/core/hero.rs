//! Scroll-driven hero animation.
//!
//! Maps normalized scroll progress through the hero section to the visual
//! state of its three layers. Every output is a clamped linear
//! interpolation over its own progress window, so a frame depends on
//! nothing but the progress value.

/// A linear ramp from `from` to `to` while progress moves across `window`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ramp {
    pub window: (f64, f64),
    pub from: f64,
    pub to: f64,
}

impl Ramp {
    pub const fn new(window: (f64, f64), from: f64, to: f64) -> Self {
        Self { window, from, to }
    }

    /// Value at `progress`, clamped to the endpoints outside the window.
    pub fn at(&self, progress: f64) -> f64 {
        let (start, end) = self.window;
        if progress <= start {
            return self.from;
        }
        if progress >= end {
            return self.to;
        }
        let t = (progress - start) / (end - start);
        self.from + (self.to - self.from) * t
    }
}

mod ramps {
    use super::Ramp;

    pub const WELCOME_OPACITY: Ramp = Ramp::new((0.0, 0.2), 1.0, 0.0);
    pub const WELCOME_SCALE: Ramp = Ramp::new((0.0, 0.2), 1.0, 0.8);

    pub const PHOTO_OPACITY: Ramp = Ramp::new((0.15, 0.3), 0.0, 1.0);
    pub const PHOTO_SCALE: Ramp = Ramp::new((0.15, 0.4), 0.5, 1.0);
    /// Percent of the photo's own width.
    pub const PHOTO_OFFSET: Ramp = Ramp::new((0.3, 0.6), 0.0, 50.0);

    pub const PREVIEW_OPACITY: Ramp = Ramp::new((0.5, 0.7), 0.0, 1.0);
    /// Pixels.
    pub const PREVIEW_OFFSET: Ramp = Ramp::new((0.5, 0.7), -50.0, 0.0);
}

/// Welcome text layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WelcomeLayer {
    pub opacity: f64,
    pub scale: f64,
}

/// Profile photo layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoLayer {
    pub opacity: f64,
    pub scale: f64,
    pub offset_pct: f64,
}

/// Biodata preview card layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewLayer {
    pub opacity: f64,
    pub offset_px: f64,
}

/// Visual state of all hero layers at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub welcome: WelcomeLayer,
    pub photo: PhotoLayer,
    pub preview: PreviewLayer,
}

impl HeroFrame {
    /// Frame for `progress`, which is clamped to `[0, 1]` first.
    pub fn at(progress: f64) -> Self {
        let p = clamp_progress(progress);
        Self {
            welcome: WelcomeLayer {
                opacity: ramps::WELCOME_OPACITY.at(p),
                scale: ramps::WELCOME_SCALE.at(p),
            },
            photo: PhotoLayer {
                opacity: ramps::PHOTO_OPACITY.at(p),
                scale: ramps::PHOTO_SCALE.at(p),
                offset_pct: ramps::PHOTO_OFFSET.at(p),
            },
            preview: PreviewLayer {
                opacity: ramps::PREVIEW_OPACITY.at(p),
                offset_px: ramps::PREVIEW_OFFSET.at(p),
            },
        }
    }
}

impl Default for HeroFrame {
    fn default() -> Self {
        Self::at(0.0)
    }
}

impl WelcomeLayer {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

impl PhotoLayer {
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateX({:.2}%) scale({:.3});",
            self.opacity, self.offset_pct, self.scale
        )
    }
}

impl PreviewLayer {
    // The card is vertically centered with translateY(-50%); keep it.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.1}px, -50%);",
            self.opacity, self.offset_px
        )
    }
}

/// Clamp progress to `[0, 1]`; NaN counts as the top of the section.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}

/// Scroll progress through a section from its bounding box.
///
/// 0 when the section's top is at the viewport top, 1 once its bottom
/// edge has reached the viewport top.
pub fn scroll_progress(section_top: f64, section_height: f64) -> f64 {
    if section_height <= 0.0 {
        return 0.0;
    }
    clamp_progress(-section_top / section_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    // =========================================================================
    // Ramp Tests
    // =========================================================================

    #[test]
    fn test_ramp_clamps_outside_window() {
        let ramp = Ramp::new((0.3, 0.6), 0.0, 50.0);
        assert_eq!(ramp.at(0.0), 0.0);
        assert_eq!(ramp.at(0.3), 0.0);
        assert_eq!(ramp.at(0.6), 50.0);
        assert_eq!(ramp.at(1.0), 50.0);
    }

    #[test]
    fn test_ramp_interpolates_linearly() {
        let ramp = Ramp::new((0.5, 0.7), -50.0, 0.0);
        assert!(close(ramp.at(0.6), -25.0));
        assert!(close(ramp.at(0.55), -37.5));
    }

    // =========================================================================
    // HeroFrame Tests
    // =========================================================================

    #[test]
    fn test_frame_at_top() {
        let frame = HeroFrame::at(0.0);
        assert_eq!(frame.welcome.opacity, 1.0);
        assert_eq!(frame.welcome.scale, 1.0);
        assert_eq!(frame.photo.opacity, 0.0);
        assert_eq!(frame.photo.scale, 0.5);
        assert_eq!(frame.photo.offset_pct, 0.0);
        assert_eq!(frame.preview.opacity, 0.0);
        assert_eq!(frame.preview.offset_px, -50.0);
    }

    #[test]
    fn test_frame_at_end() {
        let frame = HeroFrame::at(1.0);
        assert_eq!(frame.welcome.opacity, 0.0);
        assert_eq!(frame.welcome.scale, 0.8);
        assert_eq!(frame.photo.opacity, 1.0);
        assert_eq!(frame.photo.scale, 1.0);
        assert_eq!(frame.photo.offset_pct, 50.0);
        assert_eq!(frame.preview.opacity, 1.0);
        assert_eq!(frame.preview.offset_px, 0.0);
    }

    #[test]
    fn test_frame_mid_transition() {
        let frame = HeroFrame::at(0.25);
        assert_eq!(frame.welcome.opacity, 0.0);
        assert!(frame.photo.opacity > 0.0 && frame.photo.opacity < 1.0);
        assert!(close(frame.photo.opacity, 2.0 / 3.0));
        assert_eq!(frame.photo.offset_pct, 0.0);
        assert_eq!(frame.preview.opacity, 0.0);
    }

    #[test]
    fn test_frame_clamps_progress() {
        assert_eq!(HeroFrame::at(-3.0), HeroFrame::at(0.0));
        assert_eq!(HeroFrame::at(7.5), HeroFrame::at(1.0));
        assert_eq!(HeroFrame::at(f64::NAN), HeroFrame::at(0.0));
    }

    #[test]
    fn test_layer_styles() {
        let frame = HeroFrame::at(1.0);
        assert_eq!(frame.welcome.style(), "opacity: 0.000; transform: scale(0.800);");
        assert_eq!(
            frame.photo.style(),
            "opacity: 1.000; transform: translateX(50.00%) scale(1.000);"
        );
        assert_eq!(
            frame.preview.style(),
            "opacity: 1.000; transform: translate(0.0px, -50%);"
        );
    }

    // =========================================================================
    // Scroll Progress Tests
    // =========================================================================

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0), 0.0);
        assert_eq!(scroll_progress(200.0, 3000.0), 0.0);
        assert!(close(scroll_progress(-750.0, 3000.0), 0.25));
        assert_eq!(scroll_progress(-3000.0, 3000.0), 1.0);
        assert_eq!(scroll_progress(-5000.0, 3000.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }
}
