use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Returned when an aggregation or nearest-match is attempted over zero records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("operation requires at least one record")]
pub struct EmptyInputError;

/// Sums a numeric field selected by `value`. Empty input yields 0.0.
pub fn sum_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> f64 {
    records.iter().map(value).sum()
}

/// Arithmetic mean of a numeric field.
pub fn mean_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> Result<f64, EmptyInputError> {
    if records.is_empty() {
        return Err(EmptyInputError);
    }
    Ok(sum_by(records, value) / records.len() as f64)
}

/// Median of a numeric field, averaging the two middle values for even counts.
pub fn median_by<T>(records: &[T], value: impl Fn(&T) -> f64) -> Result<f64, EmptyInputError> {
    if records.is_empty() {
        return Err(EmptyInputError);
    }

    let mut values: Vec<f64> = records.iter().map(value).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = values.len();
    if n % 2 == 0 {
        Ok((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Ok(values[n / 2])
    }
}

/// Groups records by an exact-match key and sums a numeric field per group.
pub fn group_sum<T, K>(
    records: &[T],
    key: impl Fn(&T) -> K,
    value: impl Fn(&T) -> f64,
) -> HashMap<K, f64>
where
    K: Eq + Hash,
{
    let mut totals: HashMap<K, f64> = HashMap::new();
    for record in records {
        *totals.entry(key(record)).or_default() += value(record);
    }
    totals
}

/// Numerator over denominator, with 0.0 for a zero denominator.
///
/// Never returns NaN or an infinity: a zero-need region reports a 0%
/// gap rather than crashing downstream formatting.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// [`ratio`] expressed as a percentage.
pub fn pct(part: f64, total: f64) -> f64 {
    ratio(part, total) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        group: &'static str,
        value: f64,
    }

    fn rows(values: &[f64]) -> Vec<Row> {
        values.iter().map(|&value| Row { group: "", value }).collect()
    }

    #[test]
    fn test_sum_by_empty_is_zero() {
        let records: Vec<Row> = Vec::new();
        assert_eq!(sum_by(&records, |r| r.value), 0.0);
    }

    #[test]
    fn test_sum_by() {
        assert_eq!(sum_by(&rows(&[1.5, 2.5, 4.0]), |r| r.value), 8.0);
    }

    #[test]
    fn test_mean_by_empty_fails() {
        let records: Vec<Row> = Vec::new();
        assert_eq!(mean_by(&records, |r| r.value), Err(EmptyInputError));
    }

    #[test]
    fn test_mean_by() {
        assert_eq!(mean_by(&rows(&[2.0, 4.0, 9.0]), |r| r.value), Ok(5.0));
    }

    #[test]
    fn test_median_by_empty_fails() {
        let records: Vec<Row> = Vec::new();
        assert_eq!(median_by(&records, |r| r.value), Err(EmptyInputError));
    }

    #[test]
    fn test_median_by_odd_count() {
        assert_eq!(median_by(&rows(&[9.0, 1.0, 5.0]), |r| r.value), Ok(5.0));
    }

    #[test]
    fn test_median_by_even_count_averages_middle() {
        assert_eq!(median_by(&rows(&[4.0, 1.0, 3.0, 2.0]), |r| r.value), Ok(2.5));
    }

    #[test]
    fn test_group_sum() {
        let records = vec![
            Row { group: "X", value: 1.0 },
            Row { group: "Y", value: 1.0 },
            Row { group: "X", value: 2.0 },
        ];
        let totals = group_sum(&records, |r| r.group, |r| r.value);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["X"], 3.0);
        assert_eq!(totals["Y"], 1.0);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(42.0, 0.0), 0.0);
        assert!(ratio(42.0, 0.0).is_finite());
    }

    #[test]
    fn test_pct() {
        assert_eq!(pct(50.0, 100.0), 50.0);
        assert_eq!(pct(1.0, 4.0), 25.0);
        assert_eq!(pct(10.0, 0.0), 0.0);
    }
}
