//! Unit tests for the half-range trend summary

use chrono::NaiveDate;
use viewtrix::indicators::summarize_trend;
use viewtrix::models::{DatedValue, TrendDirection};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

fn dated(values: &[f64]) -> Vec<DatedValue> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DatedValue::new(d(i as u32 + 1), v))
        .collect()
}

#[test]
fn test_doubling_across_halves() {
    let trend = summarize_trend(&dated(&[100.0, 100.0, 100.0, 200.0, 200.0, 200.0])).unwrap();
    assert_eq!(trend.direction, TrendDirection::Up);
    assert_eq!(trend.percentage, 100.0);
    assert_eq!(trend.first_period_avg, 100.0);
    assert_eq!(trend.second_period_avg, 200.0);
}

#[test]
fn test_too_few_days() {
    assert!(summarize_trend(&[]).is_none());
    assert!(summarize_trend(&dated(&[500.0])).is_none());
}

#[test]
fn test_zero_first_half_emits_no_trend() {
    assert!(summarize_trend(&dated(&[0.0, 0.0, 100.0, 100.0])).is_none());
}

#[test]
fn test_odd_length_gives_extra_day_to_second_half() {
    let trend = summarize_trend(&dated(&[100.0, 100.0, 200.0, 200.0, 200.0])).unwrap();
    assert_eq!(trend.first_period_avg, 100.0);
    assert_eq!(trend.second_period_avg, 200.0);
}

#[test]
fn test_downward_trend() {
    let trend = summarize_trend(&dated(&[400.0, 400.0, 300.0, 300.0])).unwrap();
    assert_eq!(trend.direction, TrendDirection::Down);
    assert_eq!(trend.percentage, 25.0);
}

#[test]
fn test_flat_series_is_stable() {
    let trend = summarize_trend(&dated(&[150.0, 150.0, 150.0, 150.0])).unwrap();
    assert_eq!(trend.direction, TrendDirection::Stable);
    assert_eq!(trend.percentage, 0.0);
}

#[test]
fn test_sorts_by_date() {
    let mut series = dated(&[100.0, 100.0, 200.0, 200.0]);
    series.swap(0, 3);
    let trend = summarize_trend(&series).unwrap();
    assert_eq!(trend.direction, TrendDirection::Up);
    assert_eq!(trend.first_period_avg, 100.0);
}
