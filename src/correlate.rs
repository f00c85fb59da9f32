//! Pearson correlation over numeric projections of a record collection.
//!
//! Raw attribute values are coerced to numbers first: booleans become 0/1,
//! strings get integer codes in first-occurrence order (independently per
//! series), numbers pass through. Pairs with an undefined side are dropped.
//! Degenerate series correlate to exactly `0.0` by convention, never NaN.

use std::collections::HashMap;

use crate::record::{AttrValue, ClassificationResult};
use crate::sort::SortKey;

/// Pearson product-moment correlation of two paired series.
///
/// Returns `0.0` for fewer than two pairs or zero variance in either
/// series; the series are truncated to the shorter length.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}

/// Coerce a series of attribute values to numbers.
///
/// Booleans map to 0/1; strings map to integer codes assigned in
/// first-occurrence order within this series; numbers pass through; lists
/// and missing values are `None`.
#[must_use]
pub fn coerce_series(values: &[Option<AttrValue>]) -> Vec<Option<f64>> {
    let mut codes: HashMap<String, usize> = HashMap::new();
    values
        .iter()
        .map(|value| match value {
            Some(AttrValue::Number(n)) => Some(*n),
            Some(AttrValue::Bool(b)) => Some(f64::from(u8::from(*b))),
            Some(AttrValue::Text(s)) => {
                let next = codes.len();
                Some(*codes.entry(s.clone()).or_insert(next) as f64)
            }
            Some(AttrValue::List(_)) | None => None,
        })
        .collect()
}

/// Raw (non-negated) attribute projection used for correlation: the
/// sorter's projections flip accuracy signs for ordering, which would flip
/// correlation signs here.
fn attribute_value(record: &ClassificationResult, key: &SortKey) -> Option<AttrValue> {
    match key {
        SortKey::TrainAccuracy => Some(AttrValue::Number(record.train_scores.accuracy)),
        SortKey::TestAccuracy => Some(AttrValue::Number(record.test_scores.accuracy)),
        SortKey::TotalAccuracy => Some(AttrValue::Number(record.total_accuracy())),
        key => key.projection(record),
    }
}

/// Correlate two attributes over a collection, dropping records where
/// either side is undefined.
#[must_use]
pub fn correlate_attributes(
    records: &[ClassificationResult],
    x_key: &SortKey,
    y_key: &SortKey,
) -> f64 {
    let xs = coerce_series(
        &records
            .iter()
            .map(|r| attribute_value(r, x_key))
            .collect::<Vec<_>>(),
    );
    let ys = coerce_series(
        &records
            .iter()
            .map(|r| attribute_value(r, y_key))
            .collect::<Vec<_>>(),
    );

    let (paired_x, paired_y): (Vec<f64>, Vec<f64>) = xs
        .into_iter()
        .zip(ys)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .unzip();

    pearson(&paired_x, &paired_y)
}

/// Symmetric correlation matrix over a list of attributes, unit diagonal.
#[must_use]
pub fn correlation_matrix(records: &[ClassificationResult], keys: &[SortKey]) -> Vec<Vec<f64>> {
    let n = keys.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = correlate_attributes(records, &keys[i], &keys[j]);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::record;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_perfect_positive() {
        // y = 2x + 1
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]), 1.0);
    }

    #[test]
    fn test_perfect_negative() {
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[-1.0, -2.0, -3.0]), -1.0);
    }

    #[test]
    fn test_zero_variance_returns_zero() {
        assert_relative_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
        assert_relative_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_too_few_pairs_returns_zero() {
        assert_relative_eq!(pearson(&[], &[]), 0.0);
        assert_relative_eq!(pearson(&[1.0], &[2.0]), 0.0);
    }

    #[test]
    fn test_uncorrelated_is_near_zero() {
        let r = pearson(&[1.0, 2.0, 3.0, 4.0], &[1.0, -1.0, 1.0, -1.0]);
        assert!(r.abs() < 0.5);
    }

    #[test]
    fn test_result_within_unit_interval() {
        let r = pearson(&[1.0, 2.0, 2.0, 3.0], &[2.0, 4.0, 4.1, 6.0]);
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_coerce_booleans() {
        let values = vec![
            Some(AttrValue::Bool(false)),
            Some(AttrValue::Bool(true)),
        ];
        assert_eq!(coerce_series(&values), vec![Some(0.0), Some(1.0)]);
    }

    #[test]
    fn test_coerce_strings_first_occurrence_codes() {
        let values = vec![
            Some(AttrValue::Text("relu".into())),
            Some(AttrValue::Text("tanh".into())),
            Some(AttrValue::Text("relu".into())),
            Some(AttrValue::Text("elu".into())),
        ];
        assert_eq!(
            coerce_series(&values),
            vec![Some(0.0), Some(1.0), Some(0.0), Some(2.0)]
        );
    }

    #[test]
    fn test_coerce_passthrough_and_missing() {
        let values = vec![
            Some(AttrValue::Number(1.5)),
            None,
            Some(AttrValue::List(vec![AttrValue::Number(1.0)])),
        ];
        assert_eq!(coerce_series(&values), vec![Some(1.5), None, None]);
    }

    #[test]
    fn test_correlate_attributes_drops_missing_pairs() {
        let mut a = record("a", "svm", 0.9, 1.0);
        a.args.insert("alpha".to_string(), json!(1.0));
        let mut b = record("b", "svm", 0.8, 2.0);
        b.args.insert("alpha".to_string(), json!(2.0));
        let mut c = record("c", "svm", 0.7, 3.0);
        c.args.insert("alpha".to_string(), json!(3.0));
        // No alpha: dropped from the pairing.
        let d = record("d", "svm", 0.1, 9.0);

        let r = correlate_attributes(
            &[a, b, c, d],
            &SortKey::Param("alpha".to_string()),
            &SortKey::TestAccuracy,
        );
        assert_relative_eq!(r, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlate_accuracy_not_sign_flipped() {
        // Accuracy and time rise together here, so the correlation must be
        // positive even though the sorter's accuracy projection is negated.
        let records = vec![
            record("a", "svm", 0.5, 1.0),
            record("b", "svm", 0.7, 2.0),
            record("c", "svm", 0.9, 3.0),
        ];
        let r = correlate_attributes(&records, &SortKey::TestAccuracy, &SortKey::TrainTime);
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_correlation_matrix_shape() {
        let records = vec![
            record("a", "svm", 0.5, 1.0),
            record("b", "svm", 0.7, 2.0),
            record("c", "svm", 0.9, 3.0),
        ];
        let keys = vec![
            SortKey::TestAccuracy,
            SortKey::TrainTime,
            SortKey::TestTime,
        ];
        let matrix = correlation_matrix(&records, &keys);

        assert_eq!(matrix.len(), 3);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), 3);
            assert_relative_eq!(row[i], 1.0);
            for (j, &value) in row.iter().enumerate() {
                assert_relative_eq!(value, matrix[j][i]);
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }
}
