//! # clfviz
//!
//! Analytics core for a dashboard comparing machine-learning classification
//! experiment results.
//!
//! Raw results (hyperparameters, scores, confusion matrices, optional
//! training curves) come from an external fetch layer as JSON; this crate
//! sorts, colors, groups/aggregates, smooths, and correlates them. All
//! operations are synchronous pure functions over in-memory collections —
//! no I/O, no internal caching; callers recompute when inputs change.
//!
//! ## Components
//!
//! - **Sorter** ([`sort`]): deterministic total-order sort by a typed key.
//! - **Color Assigner** ([`colormap`]): value→color maps keyed by title,
//!   categorical or continuous.
//! - **Aggregator** ([`aggregate`]): grouping, best/median/mean
//!   representatives, per-epoch curve statistics with confidence intervals.
//! - **History Smoother** ([`smooth`]): TensorBoard-style exponential
//!   smoothing, applied as an immutable record update.
//! - **Correlation Engine** ([`correlate`]): Pearson correlation over
//!   coerced attribute projections.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clfviz::prelude::*;
//!
//! let records: Vec<ClassificationResult> = serde_json::from_str(&payload)?;
//! let ordered = sort_records(&records, &SortKey::TestAccuracy, false);
//! let colors = assign_colors(&ordered, &ColorMode::Method, &PaletteConfig::default());
//! let groups = group_records(&ordered, &GroupKey::Method);
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in statistics/color code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Classification result records and attribute projections.
pub mod record;

/// Color types for value→color assignments.
pub mod color;

/// Color scales and palettes.
pub mod scale;

// ============================================================================
// Pipeline Modules
// ============================================================================

/// Deterministic sorting of record collections.
pub mod sort;

/// Value→color assignment per coloring mode.
pub mod colormap;

/// Grouping, representatives, and curve statistics.
pub mod aggregate;

/// Exponential smoothing of training curves.
pub mod smooth;

/// Pearson correlation over attribute projections.
pub mod correlate;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for clfviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use clfviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{
        aggregate, group_records, grouped_history_summary, representative, summarize_curves,
        EpochStat, Group, GroupCurveSummary, GroupKey, HistoryVariable, Representative,
    };
    pub use crate::color::Rgba;
    pub use crate::colormap::{assign_colors, ColorAssignment, ColorMode, PaletteConfig};
    pub use crate::correlate::{correlate_attributes, correlation_matrix, pearson};
    pub use crate::error::{Error, Result};
    pub use crate::record::{
        data_extents, format_accuracy, format_time, parameter_names, AttrValue,
        ClassificationResult, DataExtents, History, Scores,
    };
    pub use crate::scale::{CategoricalPalette, ColorScale, ContinuousPalette, DivergingPalette};
    pub use crate::smooth::{smooth_all, smooth_curve, smooth_history};
    pub use crate::sort::{sort_records, SortKey};
}
