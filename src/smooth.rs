//! Exponential smoothing of per-epoch training curves.
//!
//! `out[0] = curve[0]`, `out[i] = w * out[i-1] + (1 - w) * curve[i]`, the
//! scheme used for scalar charts in TensorBoard. Records are updated
//! immutably: smoothing returns a new record value with `history_smoothed`
//! populated, so the same record can live in collections smoothed with
//! different weights without aliasing.

use crate::record::{ClassificationResult, History};

/// Smooth a single curve with weight `w` in `[0, 1]` (clamped).
///
/// `w = 0` is the identity; `w = 1` repeats the first element. Curves
/// shorter than two elements are returned unchanged.
#[must_use]
pub fn smooth_curve(curve: &[f64], weight: f64) -> Vec<f64> {
    if curve.len() < 2 {
        return curve.to_vec();
    }
    let w = weight.clamp(0.0, 1.0);
    let mut last = curve[0];
    curve
        .iter()
        .map(|&value| {
            let smoothed = last * w + (1.0 - w) * value;
            last = smoothed;
            smoothed
        })
        .collect()
}

/// Smooth every curve of a history; absent curves stay absent.
#[must_use]
pub fn smooth_history_curves(history: &History, weight: f64) -> History {
    let smooth = |curve: &Option<Vec<f64>>| curve.as_deref().map(|c| smooth_curve(c, weight));
    History {
        acc: smooth(&history.acc),
        val_acc: smooth(&history.val_acc),
        loss: smooth(&history.loss),
        val_loss: smooth(&history.val_loss),
    }
}

/// Return a new record with `history_smoothed` derived from `history`.
///
/// A record without `history` comes back with `history_smoothed = None`;
/// any previously cached smoothing is replaced.
#[must_use]
pub fn smooth_history(record: &ClassificationResult, weight: f64) -> ClassificationResult {
    let mut smoothed = record.clone();
    smoothed.history_smoothed = record
        .history
        .as_ref()
        .map(|h| smooth_history_curves(h, weight));
    smoothed
}

/// Smooth a whole collection, returning new record values.
#[must_use]
pub fn smooth_all(records: &[ClassificationResult], weight: f64) -> Vec<ClassificationResult> {
    records.iter().map(|r| smooth_history(r, weight)).collect()
}
