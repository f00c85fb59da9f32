//! Color scales and palettes for data-to-color mappings.
//!
//! Continuous scales are piecewise-linear interpolations over fixed color
//! stops; categorical palettes are fixed color lists assigned cyclically by
//! first-occurrence index.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Continuous color scale mapping a numeric domain to interpolated colors.
///
/// The domain may be reversed (`min > max`) to flip the direction of the
/// mapping, e.g. so lower times map to the "best" end of the scale.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<Rgba>,
    domain_min: f64,
    domain_max: f64,
}

impl ColorScale {
    /// Create a new color scale.
    ///
    /// # Errors
    ///
    /// Returns an error if `stops` is empty or the domain is degenerate.
    pub fn new(stops: Vec<Rgba>, domain: (f64, f64)) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::ScaleDomain(
                "Color scale requires at least one stop".to_string(),
            ));
        }
        if (domain.0 - domain.1).abs() < f64::EPSILON {
            return Err(Error::ScaleDomain(
                "Domain min and max cannot be equal".to_string(),
            ));
        }

        Ok(Self {
            stops,
            domain_min: domain.0,
            domain_max: domain.1,
        })
    }

    /// Map a domain value to a color, clamping to the domain ends.
    #[must_use]
    pub fn scale(&self, value: f64) -> Rgba {
        let t = ((value - self.domain_min) / (self.domain_max - self.domain_min)).clamp(0.0, 1.0);
        self.at(t as f32)
    }

    /// Color at normalized position `t` in `[0, 1]` along the stops.
    #[must_use]
    pub fn at(&self, t: f32) -> Rgba {
        interpolate_stops(&self.stops, t)
    }

    /// Get the domain extent.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }
}

/// Interpolate within a stop list at normalized position `t` in `[0, 1]`.
/// Empty stop lists yield black.
#[must_use]
pub fn interpolate_stops(stops: &[Rgba], t: f32) -> Rgba {
    match stops {
        [] => Rgba::BLACK,
        [only] => *only,
        stops => {
            let t = t.clamp(0.0, 1.0);
            let segment_count = stops.len() - 1;
            let segment = (t * segment_count as f32).floor() as usize;
            let segment = segment.min(segment_count - 1);
            let local_t = t * segment_count as f32 - segment as f32;
            stops[segment].lerp(stops[segment + 1], local_t)
        }
    }
}

/// Categorical palette choices (fixed color lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoricalPalette {
    /// The classic 10-color scheme.
    #[default]
    Category10,
    /// 12 paired colors.
    Paired,
    /// 8 accent colors.
    Accent,
    /// 8 dark colors.
    Dark2,
}

const CATEGORY10: [Rgba; 10] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
    Rgba::rgb(188, 189, 34),
    Rgba::rgb(23, 190, 207),
];

const PAIRED: [Rgba; 12] = [
    Rgba::rgb(166, 206, 227),
    Rgba::rgb(31, 120, 180),
    Rgba::rgb(178, 223, 138),
    Rgba::rgb(51, 160, 44),
    Rgba::rgb(251, 154, 153),
    Rgba::rgb(227, 26, 28),
    Rgba::rgb(253, 191, 111),
    Rgba::rgb(255, 127, 0),
    Rgba::rgb(202, 178, 214),
    Rgba::rgb(106, 61, 154),
    Rgba::rgb(255, 255, 153),
    Rgba::rgb(177, 89, 40),
];

const ACCENT: [Rgba; 8] = [
    Rgba::rgb(127, 201, 127),
    Rgba::rgb(190, 174, 212),
    Rgba::rgb(253, 192, 134),
    Rgba::rgb(255, 255, 153),
    Rgba::rgb(56, 108, 176),
    Rgba::rgb(240, 2, 127),
    Rgba::rgb(191, 91, 23),
    Rgba::rgb(102, 102, 102),
];

const DARK2: [Rgba; 8] = [
    Rgba::rgb(27, 158, 119),
    Rgba::rgb(217, 95, 2),
    Rgba::rgb(117, 112, 179),
    Rgba::rgb(231, 41, 138),
    Rgba::rgb(102, 166, 30),
    Rgba::rgb(230, 171, 2),
    Rgba::rgb(166, 118, 29),
    Rgba::rgb(102, 102, 102),
];

impl CategoricalPalette {
    /// The palette's color list.
    #[must_use]
    pub fn colors(self) -> &'static [Rgba] {
        match self {
            Self::Category10 => &CATEGORY10,
            Self::Paired => &PAIRED,
            Self::Accent => &ACCENT,
            Self::Dark2 => &DARK2,
        }
    }

    /// Color for a first-occurrence index, cycling when the palette is
    /// exhausted.
    #[must_use]
    pub fn color(self, index: usize) -> Rgba {
        let colors = self.colors();
        colors[index % colors.len()]
    }
}

/// Continuous (sequential) palette choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContinuousPalette {
    /// Warm rotation (purple through orange to yellow-green).
    Warm,
    /// Cool rotation (purple through teal to yellow-green).
    Cool,
    /// Yellow-green sequential.
    YlGn,
    /// Yellow-green-blue sequential.
    YlGnBu,
    /// Viridis (perceptually uniform).
    #[default]
    Viridis,
}

impl ContinuousPalette {
    /// The palette's interpolation stops, low to high.
    #[must_use]
    pub fn stops(self) -> Vec<Rgba> {
        match self {
            Self::Warm => vec![
                Rgba::rgb(110, 64, 170),
                Rgba::rgb(191, 60, 175),
                Rgba::rgb(254, 75, 131),
                Rgba::rgb(255, 120, 71),
                Rgba::rgb(226, 183, 47),
                Rgba::rgb(175, 240, 91),
            ],
            Self::Cool => vec![
                Rgba::rgb(110, 64, 170),
                Rgba::rgb(54, 110, 216),
                Rgba::rgb(26, 199, 194),
                Rgba::rgb(48, 239, 130),
                Rgba::rgb(175, 240, 91),
            ],
            Self::YlGn => vec![
                Rgba::rgb(255, 255, 229),
                Rgba::rgb(217, 240, 163),
                Rgba::rgb(120, 198, 121),
                Rgba::rgb(35, 132, 67),
                Rgba::rgb(0, 69, 41),
            ],
            Self::YlGnBu => vec![
                Rgba::rgb(255, 255, 217),
                Rgba::rgb(199, 233, 180),
                Rgba::rgb(65, 182, 196),
                Rgba::rgb(34, 94, 168),
                Rgba::rgb(8, 29, 88),
            ],
            Self::Viridis => vec![
                Rgba::rgb(68, 1, 84),
                Rgba::rgb(59, 82, 139),
                Rgba::rgb(33, 145, 140),
                Rgba::rgb(94, 201, 98),
                Rgba::rgb(253, 231, 37),
            ],
        }
    }

    /// Build a scale over the given (possibly reversed) domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is degenerate.
    pub fn scale(self, domain: (f64, f64)) -> Result<ColorScale> {
        ColorScale::new(self.stops(), domain)
    }
}

/// Diverging palette choices, used for correlation-matrix presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivergingPalette {
    /// Red through yellow to green.
    RdYlGn,
    /// Red through white to blue.
    #[default]
    RdBu,
    /// Spectral rainbow.
    Spectral,
}

impl DivergingPalette {
    /// The palette's interpolation stops, low to high.
    #[must_use]
    pub fn stops(self) -> Vec<Rgba> {
        match self {
            Self::RdYlGn => vec![
                Rgba::rgb(165, 0, 38),
                Rgba::rgb(244, 109, 67),
                Rgba::rgb(255, 255, 191),
                Rgba::rgb(102, 189, 99),
                Rgba::rgb(0, 104, 55),
            ],
            Self::RdBu => vec![
                Rgba::rgb(178, 24, 43),
                Rgba::rgb(239, 138, 98),
                Rgba::rgb(247, 247, 247),
                Rgba::rgb(103, 169, 207),
                Rgba::rgb(33, 102, 172),
            ],
            Self::Spectral => vec![
                Rgba::rgb(158, 1, 66),
                Rgba::rgb(244, 109, 67),
                Rgba::rgb(255, 255, 191),
                Rgba::rgb(102, 194, 165),
                Rgba::rgb(94, 79, 162),
            ],
        }
    }

    /// Build a scale over the given domain (typically `(-1.0, 1.0)`).
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is degenerate.
    pub fn scale(self, domain: (f64, f64)) -> Result<ColorScale> {
        ColorScale::new(self.stops(), domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scale_ends() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 1.0))
            .expect("scale creation should succeed");
        assert_eq!(scale.scale(0.0), Rgba::BLACK);
        assert_eq!(scale.scale(1.0), Rgba::WHITE);
    }

    #[test]
    fn test_color_scale_midpoint() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 1.0))
            .expect("scale creation should succeed");
        let mid = scale.scale(0.5);
        assert!(mid.r > 100 && mid.r < 150);
    }

    #[test]
    fn test_color_scale_clamping() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 1.0))
            .expect("scale creation should succeed");
        assert_eq!(scale.scale(-1.0), Rgba::BLACK);
        assert_eq!(scale.scale(2.0), Rgba::WHITE);
    }

    #[test]
    fn test_color_scale_reversed_domain() {
        // Reversed domain flips the mapping: smallest value -> last stop.
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (1.0, 0.0))
            .expect("scale creation should succeed");
        assert_eq!(scale.scale(0.0), Rgba::WHITE);
        assert_eq!(scale.scale(1.0), Rgba::BLACK);
    }

    #[test]
    fn test_color_scale_single_stop() {
        let red = Rgba::rgb(255, 0, 0);
        let scale =
            ColorScale::new(vec![red], (0.0, 1.0)).expect("scale creation should succeed");
        assert_eq!(scale.scale(0.5), red);
    }

    #[test]
    fn test_color_scale_invalid() {
        assert!(ColorScale::new(vec![], (0.0, 1.0)).is_err());
        assert!(ColorScale::new(vec![Rgba::BLACK], (5.0, 5.0)).is_err());
    }

    #[test]
    fn test_categorical_palette_cycles() {
        let palette = CategoricalPalette::Category10;
        assert_eq!(palette.color(0), palette.color(10));
        assert_ne!(palette.color(0), palette.color(1));
    }

    #[test]
    fn test_categorical_palette_sizes() {
        assert_eq!(CategoricalPalette::Category10.colors().len(), 10);
        assert_eq!(CategoricalPalette::Paired.colors().len(), 12);
        assert_eq!(CategoricalPalette::Accent.colors().len(), 8);
        assert_eq!(CategoricalPalette::Dark2.colors().len(), 8);
    }

    #[test]
    fn test_continuous_palettes_build() {
        for palette in [
            ContinuousPalette::Warm,
            ContinuousPalette::Cool,
            ContinuousPalette::YlGn,
            ContinuousPalette::YlGnBu,
            ContinuousPalette::Viridis,
        ] {
            let scale = palette.scale((0.0, 1.0)).expect("scale should build");
            let _ = scale.scale(0.5);
        }
    }

    #[test]
    fn test_diverging_palettes_build() {
        for palette in [
            DivergingPalette::RdYlGn,
            DivergingPalette::RdBu,
            DivergingPalette::Spectral,
        ] {
            let scale = palette.scale((-1.0, 1.0)).expect("scale should build");
            let _ = scale.scale(0.0);
        }
    }

    #[test]
    fn test_viridis_ends() {
        let scale = ContinuousPalette::Viridis
            .scale((0.0, 1.0))
            .expect("scale should build");
        assert_eq!(scale.scale(0.0), Rgba::rgb(68, 1, 84));
        assert_eq!(scale.scale(1.0), Rgba::rgb(253, 231, 37));
    }
}
