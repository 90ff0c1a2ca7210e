//! Half-range trend summary.

use crate::common::math;
use crate::models::{DatedValue, TrendDirection, TrendSummary};

/// Compare the mean of the first half of a daily series against the second.
///
/// The series is sorted by date and split at `floor(n / 2)`; an odd-length
/// range gives the extra day to the second half. Returns `None` for fewer
/// than 2 days, and `None` when the first-half average is zero (no division
/// by zero). `direction` follows the sign of the raw percentage change;
/// `percentage` is its absolute value.
pub fn summarize_trend(daily: &[DatedValue]) -> Option<TrendSummary> {
    if daily.len() < 2 {
        return None;
    }

    let mut sorted: Vec<DatedValue> = daily.to_vec();
    sorted.sort_by_key(|s| s.date);

    let mid = sorted.len() / 2;
    let first: Vec<f64> = sorted[..mid].iter().map(|s| s.value).collect();
    let second: Vec<f64> = sorted[mid..].iter().map(|s| s.value).collect();

    let first_avg = math::mean(&first)?;
    let second_avg = math::mean(&second)?;

    if first_avg == 0.0 {
        return None;
    }

    let pct = (second_avg - first_avg) / first_avg * 100.0;
    let direction = if pct > 0.0 {
        TrendDirection::Up
    } else if pct < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    };

    Some(TrendSummary {
        direction,
        percentage: math::round2(pct.abs()),
        first_period_avg: math::round2(first_avg),
        second_period_avg: math::round2(second_avg),
    })
}
