//! Unit tests for shared math helpers

use viewtrix::common::math::{mean, round2};

#[test]
fn test_mean_empty() {
    assert!(mean(&[]).is_none());
}

#[test]
fn test_mean_values() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    assert_eq!(mean(&[10.0]), Some(10.0));
}

#[test]
fn test_round2() {
    assert_eq!(round2(1114.2857142857142), 1114.29);
    assert_eq!(round2(2.718), 2.72);
    assert_eq!(round2(100.0), 100.0);
}
