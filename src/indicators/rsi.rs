//! RSI (Relative Strength Index) momentum oscillator.
//!
//! RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss, with
//! Wilder exponential smoothing of the averages (not a simple moving
//! average).

use crate::common::math;
use crate::config::DEFAULT_RSI_PERIOD;
use crate::models::{DatedValue, RsiLabel, RsiPoint};

/// Compute the Wilder-smoothed RSI series over raw values.
///
/// Returns one RSI per input index starting at `period`, rounded to 2
/// decimals; the output is shorter than the input by `period` entries.
/// Fewer than `period + 1` samples is a normal state for young series and
/// returns an empty vec, never an error. A zero average loss pins RSI at
/// 100.
pub fn calculate_rsi(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period + 1 {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(values.len() - 1);
    let mut losses = Vec::with_capacity(values.len() - 1);
    for pair in values.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period as f64;

    let mut rsi_values = Vec::with_capacity(values.len() - period);
    for i in period..values.len() {
        let rsi = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
        rsi_values.push(math::round2(rsi));

        // Wilder smoothing; the delta at index i feeds the next output.
        if i < gains.len() {
            avg_gain = (avg_gain * (period as f64 - 1.0) + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period as f64 - 1.0) + losses[i]) / period as f64;
        }
    }

    rsi_values
}

/// Compute RSI over a dated series, pairing each output with its date.
///
/// The series is sorted by date defensively. The first `period` dates have
/// no RSI and are omitted from the output.
pub fn calculate_rsi_with_dates(series: &[DatedValue], period: usize) -> Vec<RsiPoint> {
    let mut sorted: Vec<DatedValue> = series.to_vec();
    sorted.sort_by_key(|s| s.date);

    let values: Vec<f64> = sorted.iter().map(|s| s.value).collect();
    let rsi_values = calculate_rsi(&values, period);

    rsi_values
        .into_iter()
        .enumerate()
        .map(|(i, rsi)| {
            let sample = &sorted[i + period];
            RsiPoint {
                date: sample.date,
                value: sample.value,
                rsi,
            }
        })
        .collect()
}

/// Compute RSI with the default period (14).
pub fn calculate_rsi_default(series: &[DatedValue]) -> Vec<RsiPoint> {
    calculate_rsi_with_dates(series, DEFAULT_RSI_PERIOD)
}

/// Classify an RSI value.
pub fn classify_rsi(rsi: f64) -> RsiLabel {
    if rsi >= 70.0 {
        RsiLabel::Overbought
    } else if rsi <= 30.0 {
        RsiLabel::Oversold
    } else {
        RsiLabel::Neutral
    }
}
