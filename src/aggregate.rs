//! Grouping and representative aggregation of classification results.
//!
//! Groups a collection by an attribute, elects one synthetic representative
//! per group (best/median/mean under the current sort), and summarizes the
//! groups' training curves per epoch with mean, extent, and a 90%
//! confidence interval.

use crate::error::{Error, Result};
use crate::record::{extent, AttrValue, ClassificationResult, History, Scores};
use crate::smooth::smooth_history;
use crate::sort::{sort_records, SortKey};

/// Group value for fold-less records under fold grouping.
const FOLDLESS_GROUP: &str = "Summary";

/// Group value for records missing the selected hyperparameter.
const MISSING_GROUP: &str = "none";

/// z-score for a 90% confidence interval.
const CI_Z: f64 = 1.645;

/// Attribute to group a collection by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    /// Group by algorithm identifier.
    Method,
    /// Group by fold number; fold-less records fall into `"Summary"`.
    Fold,
    /// Group folds of the same classifier by base title.
    ClfWithFold,
    /// Group by hyperparameter value coerced to string; missing values
    /// fall into `"none"`.
    Param(String),
}

impl GroupKey {
    /// Map an attribute name to a `GroupKey`; unknown names resolve as
    /// hyperparameter lookups.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "method" => Self::Method,
            "fold" => Self::Fold,
            "clf_with_fold" => Self::ClfWithFold,
            param => Self::Param(param.to_string()),
        }
    }

    /// The group value of a record; total, never an error.
    #[must_use]
    pub fn value_of(&self, record: &ClassificationResult) -> String {
        match self {
            Self::Method => record.method().to_string(),
            Self::Fold => record
                .fold_number()
                .map_or_else(|| FOLDLESS_GROUP.to_string(), |fold| fold.to_string()),
            Self::ClfWithFold => record.base_title(),
            Self::Param(name) => record
                .param(name)
                .and_then(AttrValue::from_json)
                .map_or_else(|| MISSING_GROUP.to_string(), |v| v.to_string()),
        }
    }
}

/// One group of records sharing an attribute value.
#[derive(Debug, Clone)]
pub struct Group {
    /// The shared attribute value.
    pub value: String,
    /// Member records in input order.
    pub members: Vec<ClassificationResult>,
}

/// Group a collection by an attribute, in first-occurrence order of the
/// group values.
#[must_use]
pub fn group_records(records: &[ClassificationResult], key: &GroupKey) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for record in records {
        let value = key.value_of(record);
        match groups.iter_mut().find(|g| g.value == value) {
            Some(group) => group.members.push(record.clone()),
            None => groups.push(Group {
                value,
                members: vec![record.clone()],
            }),
        }
    }
    groups
}

/// How to elect a group's representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representative {
    /// First element of the group under the current sort.
    Best,
    /// Element at 0-based index `ceil(n/2)` of the sorted group.
    Median,
    /// Synthetic record with mean scores, times, and confusion matrix.
    #[default]
    Mean,
}

/// Elect a representative for a group under the current sort.
///
/// The result is a synthetic record: it carries `represents =
/// Some(group_size)` and is not part of the stored collection.
///
/// # Errors
///
/// Fails on an empty group or on confusion-matrix dimension mismatch
/// during mean aggregation.
pub fn representative(
    group: &[ClassificationResult],
    mode: Representative,
    sort_key: &SortKey,
    ascending: bool,
) -> Result<ClassificationResult> {
    if group.is_empty() {
        return Err(Error::EmptyCollection);
    }
    let sorted = sort_records(group, sort_key, ascending);

    let mut repr = match mode {
        Representative::Best => sorted[0].clone(),
        Representative::Median => {
            let index = group.len().div_ceil(2).min(group.len() - 1);
            sorted[index].clone()
        }
        Representative::Mean => mean_record(&sorted)?,
    };
    repr.represents = Some(group.len());
    Ok(repr)
}

/// Group a collection and elect one representative per group, sorted by
/// the current ordering.
///
/// # Errors
///
/// Propagates representative-election failures.
pub fn aggregate(
    records: &[ClassificationResult],
    group_key: &GroupKey,
    mode: Representative,
    sort_key: &SortKey,
    ascending: bool,
) -> Result<Vec<ClassificationResult>> {
    let groups = group_records(records, group_key);
    let mut representatives = Vec::with_capacity(groups.len());
    for group in &groups {
        representatives.push(representative(&group.members, mode, sort_key, ascending)?);
    }
    Ok(sort_records(&representatives, sort_key, ascending))
}

/// Synthetic mean record: args and hash of the first sorted element,
/// scores and times averaged over the group.
fn mean_record(sorted: &[ClassificationResult]) -> Result<ClassificationResult> {
    let mut repr = sorted[0].clone();
    repr.clf_time = mean(sorted.iter().map(|r| r.clf_time));
    repr.pred_time = mean(sorted.iter().map(|r| r.pred_time));
    repr.test_scores = Scores {
        accuracy: mean(sorted.iter().map(|r| r.test_scores.accuracy)),
        pre_rec_fs_supp: mean_components(sorted.iter().map(|r| &r.test_scores.pre_rec_fs_supp)),
        conf_matrix: mean_conf_matrix(sorted)?,
    };
    repr.train_scores = Scores {
        accuracy: mean(sorted.iter().map(|r| r.train_scores.accuracy)),
        pre_rec_fs_supp: mean_components(sorted.iter().map(|r| &r.train_scores.pre_rec_fs_supp)),
        conf_matrix: None,
    };
    Ok(repr)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Elementwise mean of the `[precision, recall, f-score]` components,
/// truncated to the shortest vector in the group.
fn mean_components<'a>(vectors: impl Iterator<Item = &'a Vec<f64>> + Clone) -> Vec<f64> {
    let len = vectors
        .clone()
        .map(Vec::len)
        .min()
        .unwrap_or(0);
    (0..len)
        .map(|i| mean(vectors.clone().map(|v| v[i])))
        .collect()
}

/// Elementwise mean of the group's test confusion matrices. Records
/// without a matrix are skipped; `None` when no member has one.
///
/// # Errors
///
/// Fails when matrices disagree in dimension or are not square.
fn mean_conf_matrix(group: &[ClassificationResult]) -> Result<Option<Vec<Vec<f64>>>> {
    let matrices: Vec<&Vec<Vec<f64>>> = group
        .iter()
        .filter_map(|r| r.test_scores.conf_matrix.as_ref())
        .collect();
    let Some(first) = matrices.first() else {
        return Ok(None);
    };

    let classes = first.len();
    for matrix in &matrices {
        if matrix.len() != classes {
            return Err(Error::ConfMatrixShape {
                expected: classes,
                found_rows: matrix.len(),
                found_cols: matrix.first().map_or(0, Vec::len),
            });
        }
        for row in matrix.iter() {
            if row.len() != classes {
                return Err(Error::ConfMatrixNotSquare {
                    rows: matrix.len(),
                    cols: row.len(),
                });
            }
        }
    }

    let mut sum = vec![vec![0.0; classes]; classes];
    for matrix in &matrices {
        for (row, sum_row) in matrix.iter().zip(sum.iter_mut()) {
            for (value, total) in row.iter().zip(sum_row.iter_mut()) {
                *total += value;
            }
        }
    }
    let count = matrices.len() as f64;
    for row in &mut sum {
        for value in row.iter_mut() {
            *value /= count;
        }
    }
    Ok(Some(sum))
}

/// Per-epoch statistics over a group of curves.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStat {
    /// 1-based epoch number (presentation convention).
    pub epoch: usize,
    /// Mean over the curves reaching this epoch.
    pub mean: f64,
    /// Minimum over the contributing curves.
    pub min: f64,
    /// Maximum over the contributing curves.
    pub max: f64,
    /// Lower bound of the 90% confidence interval.
    pub ci_low: f64,
    /// Upper bound of the 90% confidence interval.
    pub ci_high: f64,
    /// Number of curves contributing to this epoch.
    pub n: usize,
}

/// Summarize a group of possibly unequal-length curves per epoch.
///
/// Epochs beyond a curve's length simply exclude that curve; nothing is
/// padded. A single contributing curve yields a zero-width interval.
#[must_use]
pub fn summarize_curves(curves: &[&[f64]]) -> Vec<EpochStat> {
    let max_len = curves.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut stats = Vec::with_capacity(max_len);

    for epoch in 0..max_len {
        let values: Vec<f64> = curves
            .iter()
            .filter_map(|curve| curve.get(epoch).copied())
            .collect();
        let n = values.len();
        let m = mean(values.iter().copied());
        let (min, max) = extent(values.iter().copied());

        let half = if n < 2 {
            0.0
        } else {
            // Deviation with n in the denominator, as the charts have
            // always computed it.
            let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / n as f64;
            CI_Z * variance.sqrt() / (n as f64).sqrt()
        };

        stats.push(EpochStat {
            epoch: epoch + 1,
            mean: m,
            min,
            max,
            ci_low: m - half,
            ci_high: m + half,
            n,
        });
    }
    stats
}

/// Which pair of curves a combined history chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryVariable {
    /// `acc` / `val_acc`.
    #[default]
    Accuracy,
    /// `loss` / `val_loss`.
    Loss,
}

impl HistoryVariable {
    /// Select `(train, validation)` curves from a history.
    #[must_use]
    pub fn curves<'a>(&self, history: &'a History) -> (Option<&'a [f64]>, Option<&'a [f64]>) {
        match self {
            Self::Accuracy => (history.acc.as_deref(), history.val_acc.as_deref()),
            Self::Loss => (history.loss.as_deref(), history.val_loss.as_deref()),
        }
    }
}

/// Per-group summary of smoothed training and validation curves.
#[derive(Debug, Clone)]
pub struct GroupCurveSummary {
    /// The group's attribute value.
    pub value: String,
    /// Number of member records.
    pub size: usize,
    /// Per-epoch statistics of the training curves.
    pub train: Vec<EpochStat>,
    /// Per-epoch statistics of the validation curves.
    pub val: Vec<EpochStat>,
}

/// Smooth each member's history and summarize one curve pair per group.
///
/// Records without a history are skipped; a missing validation curve
/// simply contributes nothing to the validation statistics.
#[must_use]
pub fn grouped_history_summary(
    groups: &[Group],
    variable: HistoryVariable,
    smoothing_weight: f64,
) -> Vec<GroupCurveSummary> {
    groups
        .iter()
        .map(|group| {
            let smoothed: Vec<ClassificationResult> = group
                .members
                .iter()
                .map(|r| smooth_history(r, smoothing_weight))
                .collect();
            let histories: Vec<&History> = smoothed
                .iter()
                .filter_map(|r| r.history_smoothed.as_ref())
                .collect();

            let train: Vec<&[f64]> = histories
                .iter()
                .filter_map(|h| variable.curves(h).0)
                .collect();
            let val: Vec<&[f64]> = histories
                .iter()
                .filter_map(|h| variable.curves(h).1)
                .collect();

            GroupCurveSummary {
                value: group.value.clone(),
                size: group.members.len(),
                train: summarize_curves(&train),
                val: summarize_curves(&val),
            }
        })
        .collect()
}
