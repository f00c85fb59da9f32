//! Classification result records and attribute-value projections.
//!
//! Records arrive as JSON from the external fetch layer. `args` is an
//! ordered mapping that always contains `title` (unique display name) and
//! `method` (algorithm identifier); all remaining keys are hyperparameters
//! of arbitrary arity and type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `args` keys that are bookkeeping rather than hyperparameters.
const RESERVED_ARGS: [&str; 4] = ["title", "file", "model_file", "method"];

/// Scores of one evaluation pass (train or test).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Accuracy in `[0, 1]`.
    pub accuracy: f64,
    /// `[precision, recall, f-score]`, each in `[0, 1]`.
    pub pre_rec_fs_supp: Vec<f64>,
    /// Square confusion matrix (test scores only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conf_matrix: Option<Vec<Vec<f64>>>,
}

/// Per-epoch training curves. Every curve is optional; lengths may differ
/// only in degenerate cases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    /// Training accuracy per epoch (`accuracy` in the legacy format).
    #[serde(default, alias = "accuracy", skip_serializing_if = "Option::is_none")]
    pub acc: Option<Vec<f64>>,
    /// Validation accuracy per epoch (`val_accuracy` in the legacy format).
    #[serde(default, alias = "val_accuracy", skip_serializing_if = "Option::is_none")]
    pub val_acc: Option<Vec<f64>>,
    /// Training loss per epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss: Option<Vec<f64>>,
    /// Validation loss per epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_loss: Option<Vec<f64>>,
}

/// One trained-and-evaluated classifier instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Opaque unique identifier.
    pub hash: String,
    /// Ordered mapping of argument names to values; contains `title` and
    /// `method` plus arbitrary hyperparameters.
    pub args: Map<String, Value>,
    /// Scores on the training set.
    pub train_scores: Scores,
    /// Scores on the test set.
    pub test_scores: Scores,
    /// Training duration in seconds.
    pub clf_time: f64,
    /// Prediction duration in seconds.
    pub pred_time: f64,
    /// Raw per-epoch training curves, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
    /// Smoothed curves, populated by the history smoother.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_smoothed: Option<History>,
    /// `Some(group_size)` on synthetic aggregation representatives only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub represents: Option<usize>,
}

impl ClassificationResult {
    /// The unique display title, or `""` if the fetch layer delivered a
    /// malformed record.
    #[must_use]
    pub fn title(&self) -> &str {
        self.args.get("title").and_then(Value::as_str).unwrap_or("")
    }

    /// The algorithm identifier.
    #[must_use]
    pub fn method(&self) -> &str {
        self.args
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// A hyperparameter value by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Sum of train and test accuracy.
    #[must_use]
    pub fn total_accuracy(&self) -> f64 {
        self.train_scores.accuracy + self.test_scores.accuracy
    }

    /// Cross-validation fold number parsed from the title suffix
    /// (`"... fold3"` gives `Some(3)`), or `None` for fold-less records.
    #[must_use]
    pub fn fold_number(&self) -> Option<i64> {
        let parts: Vec<&str> = self.title().split(' ').collect();
        if parts.len() < 2 {
            return None;
        }
        let last = parts[parts.len() - 1];
        if !last.contains("fold") {
            return None;
        }
        last.replace("fold", "").parse().ok()
    }

    /// The title without its fold suffix; equals the title for fold-less
    /// records.
    #[must_use]
    pub fn base_title(&self) -> String {
        let parts: Vec<&str> = self.title().split(' ').collect();
        if parts.len() < 2 || !parts[parts.len() - 1].contains("fold") {
            return self.title().to_string();
        }
        parts[..parts.len() - 1].join(" ")
    }

    /// Whether this is a synthetic aggregation representative.
    #[must_use]
    pub fn is_representative(&self) -> bool {
        self.represents.is_some()
    }
}

/// A totally ordered projection of heterogeneous attribute values.
///
/// Built from `serde_json::Value`; used by the sorter, color assigner,
/// aggregator and correlation engine. Within a variant, natural order;
/// across variants, a fixed rank (number < bool < text < list).
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Text(String),
    /// Array value, compared elementwise.
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Convert a JSON value; `None` for null, objects, and non-finite
    /// representations.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(AttrValue::Number),
            Value::Bool(b) => Some(AttrValue::Bool(*b)),
            Value::String(s) => Some(AttrValue::Text(s.clone())),
            Value::Array(items) => Some(AttrValue::List(
                items.iter().filter_map(AttrValue::from_json).collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }

    /// Numeric value if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            AttrValue::Number(_) => 0,
            AttrValue::Bool(_) => 1,
            AttrValue::Text(_) => 2,
            AttrValue::List(_) => 3,
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttrValue {}

impl PartialOrd for AttrValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttrValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (AttrValue::Number(a), AttrValue::Number(b)) => a.total_cmp(b),
            (AttrValue::Bool(a), AttrValue::Bool(b)) => a.cmp(b),
            (AttrValue::Text(a), AttrValue::Text(b)) => a.cmp(b),
            (AttrValue::List(a), AttrValue::List(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) => write!(f, "{n}"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Text(s) => write!(f, "{s}"),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// Min/max extents of the scalar record properties, for axis domains and
/// continuous color scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataExtents {
    /// Extent of train accuracy.
    pub train_accuracy: (f64, f64),
    /// Extent of test accuracy.
    pub test_accuracy: (f64, f64),
    /// Extent of training time in seconds.
    pub train_time: (f64, f64),
    /// Extent of prediction time in seconds.
    pub test_time: (f64, f64),
}

/// Compute property extents over a collection; `None` when empty.
#[must_use]
pub fn data_extents(records: &[ClassificationResult]) -> Option<DataExtents> {
    if records.is_empty() {
        return None;
    }
    Some(DataExtents {
        train_accuracy: extent(records.iter().map(|r| r.train_scores.accuracy)),
        test_accuracy: extent(records.iter().map(|r| r.test_scores.accuracy)),
        train_time: extent(records.iter().map(|r| r.clf_time)),
        test_time: extent(records.iter().map(|r| r.pred_time)),
    })
}

/// Min/max of a non-empty value sequence.
pub(crate) fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

/// Sorted distinct hyperparameter names occurring in any record, excluding
/// bookkeeping keys.
#[must_use]
pub fn parameter_names(records: &[ClassificationResult]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .flat_map(|r| r.args.keys())
        .filter(|k| !RESERVED_ARGS.contains(&k.as_str()))
        .cloned()
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Format a duration for display, picking seconds, minutes, hours, or days.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.2}s")
    } else if seconds < 3600.0 {
        format!("{:.2}m", seconds / 60.0)
    } else if seconds < 7.0 * 24.0 * 3600.0 {
        format!("{:.2}h", seconds / 3600.0)
    } else {
        format!("{:.2}d", seconds / (24.0 * 3600.0))
    }
}

/// Format an accuracy fraction as a percentage.
#[must_use]
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.0}%", accuracy * 100.0)
}
