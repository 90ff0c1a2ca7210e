//! Unit tests for the percentile sentiment index

use chrono::NaiveDate;
use viewtrix::indicators::{calculate_vsi, classify_vsi};
use viewtrix::models::{Ma7Point, VsiLabel};

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

fn ma7_points(values: &[Option<f64>]) -> Vec<Ma7Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, &ma7)| Ma7Point {
            date: d(i as u32 + 1),
            value: ma7.unwrap_or(0.0),
            ma7,
        })
        .collect()
}

#[test]
fn test_empty_history_yields_all_none() {
    let points = calculate_vsi(&ma7_points(&[None, None, None]));
    assert!(points.iter().all(|p| p.vsi.is_none() && p.vsi_label.is_none()));
}

#[test]
fn test_maximum_ranks_exactly_100() {
    let points = calculate_vsi(&ma7_points(&[
        Some(100.0),
        Some(250.0),
        Some(175.0),
        Some(300.0),
    ]));
    assert_eq!(points[3].vsi, Some(100));
}

#[test]
fn test_all_equal_values_all_rank_100() {
    let points = calculate_vsi(&ma7_points(&[Some(42.0); 5]));
    assert!(points.iter().all(|p| p.vsi == Some(100)));
    assert!(points.iter().all(|p| p.vsi_label == Some(VsiLabel::ExtremeHype)));
}

#[test]
fn test_unique_minimum_is_not_zero() {
    // Rank-based percentile: the minimum counts itself, so 100/|V| rounded.
    let points = calculate_vsi(&ma7_points(&[
        Some(10.0),
        Some(20.0),
        Some(30.0),
        Some(40.0),
    ]));
    assert_eq!(points[0].vsi, Some(25));
}

#[test]
fn test_monotonic_in_value() {
    let values: Vec<Option<f64>> = [30.0, 10.0, 50.0, 20.0, 40.0]
        .iter()
        .map(|&v| Some(v))
        .collect();
    let points = calculate_vsi(&ma7_points(&values));

    let mut pairs: Vec<(f64, u32)> = points
        .iter()
        .zip(values.iter())
        .map(|(p, v)| (v.unwrap(), p.vsi.unwrap()))
        .collect();
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    for window in pairs.windows(2) {
        assert!(window[0].1 <= window[1].1);
    }
}

#[test]
fn test_none_points_pass_through() {
    let points = calculate_vsi(&ma7_points(&[None, Some(10.0), None, Some(20.0)]));
    assert!(points[0].vsi.is_none());
    assert!(points[2].vsi.is_none());
    assert_eq!(points[1].vsi, Some(50));
    assert_eq!(points[3].vsi, Some(100));
}

#[test]
fn test_classification_buckets() {
    assert_eq!(classify_vsi(0), VsiLabel::ExtremeDisinterest);
    assert_eq!(classify_vsi(10), VsiLabel::ExtremeDisinterest);
    assert_eq!(classify_vsi(11), VsiLabel::VeryLowInterest);
    assert_eq!(classify_vsi(30), VsiLabel::VeryLowInterest);
    assert_eq!(classify_vsi(31), VsiLabel::NormalRange);
    assert_eq!(classify_vsi(70), VsiLabel::NormalRange);
    assert_eq!(classify_vsi(71), VsiLabel::HighInterest);
    assert_eq!(classify_vsi(90), VsiLabel::HighInterest);
    assert_eq!(classify_vsi(91), VsiLabel::ExtremeHype);
    assert_eq!(classify_vsi(100), VsiLabel::ExtremeHype);
}
