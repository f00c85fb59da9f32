//! Deterministic total-order sorting of classification results.
//!
//! The comparator computes a "better last" base order (accuracy accessors
//! negated, times natural), breaks ties on the unique title, and reverses
//! the whole order for descending output. The tie-break direction is fixed
//! and deliberately not mirrored by the `ascending` flag; every view relies
//! on this exact ordering.

use std::cmp::Ordering;

use crate::record::{AttrValue, ClassificationResult};

/// Sort key selecting a record projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Display title.
    Title,
    /// Algorithm identifier.
    Method,
    /// Train accuracy (higher is better).
    TrainAccuracy,
    /// Test accuracy (higher is better).
    TestAccuracy,
    /// Sum of train and test accuracy (higher is better).
    TotalAccuracy,
    /// Training time in seconds (lower is better).
    TrainTime,
    /// Prediction time in seconds (lower is better).
    TestTime,
    /// Cross-validation fold number; fold-less records use `-1`.
    Fold,
    /// A hyperparameter looked up in `args`; missing values sort last.
    Param(String),
}

impl SortKey {
    /// Map a key name to a `SortKey`; unknown names resolve as
    /// hyperparameter lookups, never an error.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "title" => Self::Title,
            "method" => Self::Method,
            "train_accuracy" => Self::TrainAccuracy,
            "test_accuracy" => Self::TestAccuracy,
            "total_accuracy" => Self::TotalAccuracy,
            "train_time" => Self::TrainTime,
            "test_time" => Self::TestTime,
            "fold" => Self::Fold,
            param => Self::Param(param.to_string()),
        }
    }

    /// The "better last" base projection of a record. Accuracies are
    /// negated so that the shared comparator can treat every key the same
    /// way; `None` only for missing hyperparameters.
    #[must_use]
    pub fn projection(&self, record: &ClassificationResult) -> Option<AttrValue> {
        match self {
            Self::Title => Some(AttrValue::Text(record.title().to_string())),
            Self::Method => Some(AttrValue::Text(record.method().to_string())),
            Self::TrainAccuracy => Some(AttrValue::Number(-record.train_scores.accuracy)),
            Self::TestAccuracy => Some(AttrValue::Number(-record.test_scores.accuracy)),
            Self::TotalAccuracy => Some(AttrValue::Number(-record.total_accuracy())),
            Self::TrainTime => Some(AttrValue::Number(record.clf_time)),
            Self::TestTime => Some(AttrValue::Number(record.pred_time)),
            Self::Fold => Some(AttrValue::Number(
                record.fold_number().unwrap_or(-1) as f64
            )),
            Self::Param(name) => record.param(name).and_then(AttrValue::from_json),
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::TestAccuracy
    }
}

/// Fixed-direction tie-break on the unique title. Not flipped by the
/// `ascending` flag itself; the final whole-order reversal applies to it
/// like to everything else.
fn title_tie_break(a: &ClassificationResult, b: &ClassificationResult) -> Ordering {
    b.title().cmp(a.title())
}

/// Base comparator over defined projections: larger projection values sort
/// earlier, equal values fall back to the title tie-break.
fn base_cmp(a: &AttrValue, b: &AttrValue) -> Ordering {
    a.cmp(b).reverse()
}

/// Sort a collection by the given key and direction, returning a new
/// ordered vector.
///
/// Records whose projection is missing sort after all defined values
/// regardless of direction. The result is a total order: distinct records
/// never compare equal thanks to the title tie-break, so sorting is
/// deterministic and idempotent.
#[must_use]
pub fn sort_records(
    records: &[ClassificationResult],
    key: &SortKey,
    ascending: bool,
) -> Vec<ClassificationResult> {
    let mut defined: Vec<(AttrValue, ClassificationResult)> = Vec::new();
    let mut missing: Vec<ClassificationResult> = Vec::new();
    for record in records {
        match key.projection(record) {
            Some(value) => defined.push((value, record.clone())),
            None => missing.push(record.clone()),
        }
    }

    defined.sort_by(|(va, a), (vb, b)| base_cmp(va, vb).then_with(|| title_tie_break(a, b)));
    missing.sort_by(|a, b| title_tie_break(a, b));

    if !ascending {
        defined.reverse();
        missing.reverse();
    }

    let mut sorted: Vec<ClassificationResult> = defined.into_iter().map(|(_, r)| r).collect();
    sorted.extend(missing);
    sorted
}
