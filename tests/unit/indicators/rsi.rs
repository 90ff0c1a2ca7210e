//! Unit tests for the Wilder RSI oscillator

use chrono::NaiveDate;
use viewtrix::indicators::{calculate_rsi, calculate_rsi_with_dates, classify_rsi};
use viewtrix::models::{DatedValue, RsiLabel};

fn d(day: u32) -> NaiveDate {
    // Day offsets may run past the end of August (e.g. 33 Wilder closes),
    // so roll over into the next month instead of panicking.
    NaiveDate::from_ymd_opt(2026, 8, 1).unwrap() + chrono::Days::new(u64::from(day) - 1)
}

fn dated(values: &[f64]) -> Vec<DatedValue> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DatedValue::new(d(i as u32 + 1), v))
        .collect()
}

/// Wilder's original worked example (14-period, daily closes).
const WILDER_CLOSES: [f64; 33] = [
    44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
    45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64, 46.21, 46.25, 45.71, 46.45,
    45.78, 45.35, 44.03, 44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
];

#[test]
fn test_insufficient_samples_returns_empty() {
    assert!(calculate_rsi(&[], 14).is_empty());
    assert!(calculate_rsi(&[100.0], 14).is_empty());
    let fourteen = vec![100.0; 14];
    assert!(calculate_rsi(&fourteen, 14).is_empty());
}

#[test]
fn test_wilder_reference_sequence() {
    let rsi = calculate_rsi(&WILDER_CLOSES, 14);
    assert_eq!(rsi.len(), WILDER_CLOSES.len() - 14);
    // Textbook value for the first output, then the smoothed continuation.
    assert_eq!(rsi[0], 70.46);
    assert_eq!(rsi[1], 66.25);
    assert_eq!(rsi[2], 66.48);
    assert_eq!(rsi[3], 69.35);
    assert_eq!(rsi[4], 66.29);
    assert_eq!(rsi[5], 57.92);
    assert_eq!(rsi[6], 62.88);
    assert_eq!(rsi[7], 63.21);
}

#[test]
fn test_monotone_rise_pins_rsi_at_100() {
    let values: Vec<f64> = (1..=20).map(|v| v as f64).collect();
    let rsi = calculate_rsi(&values, 14);
    assert!(!rsi.is_empty());
    assert!(rsi.iter().all(|&v| v == 100.0));
}

#[test]
fn test_output_shorter_by_period() {
    let values: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
    let rsi = calculate_rsi(&values, 14);
    assert_eq!(rsi.len(), values.len() - 14);
    assert!(rsi.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn test_with_dates_aligns_output() {
    let values: Vec<f64> = (0..18).map(|i| 1000.0 + (i * 37 % 90) as f64).collect();
    let points = calculate_rsi_with_dates(&dated(&values), 14);
    assert_eq!(points.len(), 4);
    // The first RSI lands on the 15th sample's date.
    assert_eq!(points[0].date, d(15));
    assert_eq!(points[3].date, d(18));
    assert_eq!(points[0].value, values[14]);
}

#[test]
fn test_with_dates_sorts_defensively() {
    let values: Vec<f64> = (0..16).map(|i| 100.0 + i as f64).collect();
    let mut series = dated(&values);
    series.reverse();
    let points = calculate_rsi_with_dates(&series, 14);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, d(15));
    assert_eq!(points[0].rsi, 100.0);
}

#[test]
fn test_default_period_is_14() {
    let series = dated(&WILDER_CLOSES);
    let points = viewtrix::indicators::calculate_rsi_default(&series);
    assert_eq!(points.len(), WILDER_CLOSES.len() - 14);
    assert_eq!(points[0].rsi, 70.46);
}

#[test]
fn test_classification() {
    assert_eq!(classify_rsi(70.0), RsiLabel::Overbought);
    assert_eq!(classify_rsi(85.5), RsiLabel::Overbought);
    assert_eq!(classify_rsi(30.0), RsiLabel::Oversold);
    assert_eq!(classify_rsi(12.3), RsiLabel::Oversold);
    assert_eq!(classify_rsi(50.0), RsiLabel::Neutral);
    assert_eq!(classify_rsi(69.99), RsiLabel::Neutral);
}
