//! Trailing 7-day moving average.

use crate::common::math;
use crate::models::{DatedValue, Ma7Point};

/// Window size of the trailing moving average.
pub const MA7_WINDOW: usize = 7;

/// Compute the trailing 7-sample moving average over a daily series.
///
/// Input order is not assumed; the series is sorted by date before the
/// window is applied. The first 6 samples carry `ma7 = None`; from the 7th
/// sample on, `ma7` is the mean of the current and six preceding samples,
/// rounded to 2 decimals.
///
/// Precondition: the window runs over the sequence *as supplied*. If the
/// caller filters out excluded days or the series has calendar gaps, the
/// window averages the 7 nearest remaining samples rather than 7 adjacent
/// calendar days. Callers wanting exclusion-aware averaging filter first.
pub fn calculate_ma7(series: &[DatedValue]) -> Vec<Ma7Point> {
    let mut sorted: Vec<DatedValue> = series.to_vec();
    sorted.sort_by_key(|s| s.date);

    sorted
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let ma7 = if i < MA7_WINDOW - 1 {
                None
            } else {
                let window: Vec<f64> = sorted[i + 1 - MA7_WINDOW..=i]
                    .iter()
                    .map(|s| s.value)
                    .collect();
                math::mean(&window).map(math::round2)
            };
            Ma7Point {
                date: sample.date,
                value: sample.value,
                ma7,
            }
        })
        .collect()
}
