//! Color types for the dashboard's value→color assignments.
//!
//! Provides an RGBA color representation with linear interpolation and
//! CSS-string output for the presentation layer.

use std::fmt;

/// Alpha applied to the translucent variant of an assigned color.
pub const TRANSLUCENT_ALPHA: f32 = 0.7;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Create a color with the given opacity in `[0, 1]`, preserving RGB.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }

    /// The translucent variant used for semi-transparent chart fills.
    #[must_use]
    pub fn translucent(self) -> Self {
        self.with_opacity(TRANSLUCENT_ALPHA)
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }

    /// Opacity as a fraction in `[0, 1]`.
    #[must_use]
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// CSS string: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                self.opacity()
            )
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK, Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::WHITE, Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::BLACK.a, 255);
    }

    #[test]
    fn test_rgba_lerp() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_eq!(mid.r, 127);
        assert_eq!(mid.g, 127);
        assert_eq!(mid.b, 127);
    }

    #[test]
    fn test_lerp_boundaries() {
        let black = Rgba::BLACK;
        let white = Rgba::WHITE;

        assert_eq!(black.lerp(white, 0.0), black);
        assert_eq!(black.lerp(white, 1.0), white);
        // t clamped to [0, 1]
        assert_eq!(black.lerp(white, -0.5), black);
        assert_eq!(black.lerp(white, 1.5), white);
    }

    #[test]
    fn test_translucent_preserves_rgb() {
        let c = Rgba::rgb(31, 119, 180).translucent();
        assert_eq!((c.r, c.g, c.b), (31, 119, 180));
        assert!((c.opacity() - TRANSLUCENT_ALPHA).abs() < 0.01);
    }

    #[test]
    fn test_to_css_opaque() {
        assert_eq!(Rgba::rgb(31, 119, 180).to_css(), "#1f77b4");
    }

    #[test]
    fn test_to_css_translucent() {
        let css = Rgba::rgb(255, 0, 0).translucent().to_css();
        assert!(css.starts_with("rgba(255, 0, 0"));
        assert!(css.contains("0.70"));
    }

    #[test]
    fn test_display_matches_css() {
        let c = Rgba::rgb(1, 2, 3);
        assert_eq!(c.to_string(), c.to_css());
    }

    #[test]
    fn test_with_opacity_clamps() {
        assert_eq!(Rgba::BLACK.with_opacity(2.0).a, 255);
        assert_eq!(Rgba::BLACK.with_opacity(-1.0).a, 0);
    }
}
