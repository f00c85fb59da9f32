//! Value→color assignment over a record collection.
//!
//! Categorical modes assign palette colors cyclically by first-occurrence
//! index of the mode's value; continuous modes interpolate the value's
//! extent into a continuous scale. Time extents are reversed so lower
//! (better) times map to the same visual end as high accuracy.
//!
//! `assign_colors` is a pure function of `(records, mode, palette_config)`;
//! callers recompute whenever any of the three changes.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::record::{extent, AttrValue, ClassificationResult};
use crate::scale::{interpolate_stops, CategoricalPalette, ContinuousPalette, DivergingPalette};

/// Category value for records missing the selected hyperparameter.
const MISSING_CATEGORY: &str = "none";

/// Coloring mode selecting a record projection and scale type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// Categorical by base title (fold suffix stripped).
    Title,
    /// Categorical by algorithm identifier.
    Method,
    /// Categorical by fold number (`-1` for fold-less records).
    Fold,
    /// Continuous by train accuracy.
    TrainAccuracy,
    /// Continuous by test accuracy.
    TestAccuracy,
    /// Continuous by train + test accuracy.
    TotalAccuracy,
    /// Continuous by training time, reversed (lower is better).
    TrainTime,
    /// Continuous by prediction time, reversed (lower is better).
    TestTime,
    /// Categorical by hyperparameter value.
    Param(String),
}

impl ColorMode {
    /// Map a mode name to a `ColorMode`; unknown names resolve as
    /// hyperparameter modes.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "method" => Self::Method,
            "fold" => Self::Fold,
            "train_accuracy" => Self::TrainAccuracy,
            "test_accuracy" => Self::TestAccuracy,
            "total_accuracy" => Self::TotalAccuracy,
            "train_time" => Self::TrainTime,
            "test_time" => Self::TestTime,
            param => Self::Param(param.to_string()),
        }
    }

    /// Whether this mode uses the categorical palette.
    #[must_use]
    pub fn is_categorical(&self) -> bool {
        matches!(
            self,
            Self::Title | Self::Method | Self::Fold | Self::Param(_)
        )
    }

    /// Whether lower values are better, reversing the continuous extent.
    #[must_use]
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::TrainTime | Self::TestTime)
    }

    /// Category string for a record under a categorical mode.
    fn category(&self, record: &ClassificationResult) -> String {
        match self {
            Self::Title => record.base_title(),
            Self::Method => record.method().to_string(),
            Self::Fold => record.fold_number().unwrap_or(-1).to_string(),
            Self::Param(name) => record
                .param(name)
                .and_then(AttrValue::from_json)
                .map_or_else(|| MISSING_CATEGORY.to_string(), |v| v.to_string()),
            _ => String::new(),
        }
    }

    /// Numeric value for a record under a continuous mode.
    fn numeric(&self, record: &ClassificationResult) -> f64 {
        match self {
            Self::TrainAccuracy => record.train_scores.accuracy,
            Self::TestAccuracy => record.test_scores.accuracy,
            Self::TotalAccuracy => record.total_accuracy(),
            Self::TrainTime => record.clf_time,
            Self::TestTime => record.pred_time,
            _ => 0.0,
        }
    }
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Method
    }
}

/// Palette selection threaded through as explicit configuration (no
/// ambient/global theme state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Palette for categorical modes.
    pub categorical: CategoricalPalette,
    /// Scale for continuous modes.
    pub continuous: ContinuousPalette,
    /// Scale for diverging presentations (correlation matrices).
    pub diverging: DivergingPalette,
}

/// Color maps keyed by record title, one opaque and one translucent.
#[derive(Debug, Clone, Default)]
pub struct ColorAssignment {
    colors: HashMap<String, Rgba>,
}

impl ColorAssignment {
    /// Opaque color for a record title.
    #[must_use]
    pub fn color_of(&self, title: &str) -> Option<Rgba> {
        self.colors.get(title).copied()
    }

    /// Translucent variant (alpha 0.7, same RGB) for a record title.
    #[must_use]
    pub fn translucent_color_of(&self, title: &str) -> Option<Rgba> {
        self.color_of(title).map(Rgba::translucent)
    }

    /// CSS-string map of the opaque colors, for the presentation layer.
    #[must_use]
    pub fn css_colors(&self) -> HashMap<String, String> {
        self.colors
            .iter()
            .map(|(title, color)| (title.clone(), color.to_css()))
            .collect()
    }

    /// CSS-string map of the translucent colors.
    #[must_use]
    pub fn css_translucent_colors(&self) -> HashMap<String, String> {
        self.colors
            .iter()
            .map(|(title, color)| (title.clone(), color.translucent().to_css()))
            .collect()
    }

    /// Number of assigned titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no titles are assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Assign a color to every record, keyed by its unique title.
#[must_use]
pub fn assign_colors(
    records: &[ClassificationResult],
    mode: &ColorMode,
    config: &PaletteConfig,
) -> ColorAssignment {
    if mode.is_categorical() {
        assign_categorical(records, mode, config.categorical)
    } else {
        assign_continuous(records, mode, config.continuous)
    }
}

/// One deterministic pass collects distinct category values in
/// first-occurrence order, recording palette indices in a map.
fn assign_categorical(
    records: &[ClassificationResult],
    mode: &ColorMode,
    palette: CategoricalPalette,
) -> ColorAssignment {
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut colors: HashMap<String, Rgba> = HashMap::with_capacity(records.len());

    for record in records {
        let value = mode.category(record);
        let next = index_of.len();
        let index = *index_of.entry(value).or_insert(next);
        colors.insert(record.title().to_string(), palette.color(index));
    }

    ColorAssignment { colors }
}

fn assign_continuous(
    records: &[ClassificationResult],
    mode: &ColorMode,
    palette: ContinuousPalette,
) -> ColorAssignment {
    let mut colors: HashMap<String, Rgba> = HashMap::with_capacity(records.len());
    if records.is_empty() {
        return ColorAssignment { colors };
    }

    let (min, max) = extent(records.iter().map(|r| mode.numeric(r)));
    let (domain_min, domain_max) = if mode.lower_is_better() {
        (max, min)
    } else {
        (min, max)
    };

    let stops = palette.stops();
    let span = domain_max - domain_min;
    for record in records {
        let value = mode.numeric(record);
        // Degenerate extent maps everything to the scale midpoint.
        let t = if span.abs() < f64::EPSILON {
            0.5
        } else {
            (value - domain_min) / span
        };
        colors.insert(
            record.title().to_string(),
            interpolate_stops(&stops, t as f32),
        );
    }

    ColorAssignment { colors }
}
