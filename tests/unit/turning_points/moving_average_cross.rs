//! Unit tests for golden/death cross resolution

use crate::fixtures::{date, points};
use wgo_technicals::models::IndicatorPoint;
use wgo_technicals::turning_points::detect_moving_average_crosses;

fn flat_200(len: usize) -> Vec<IndicatorPoint> {
    points(&vec![100.0; len], date(2024, 1, 1))
}

#[test]
fn test_golden_cross_after_latest_death_cross() {
    // golden on Jan 2, death on Jan 3, golden again on Jan 4
    let sma50 = points(&[99.0, 101.0, 99.0, 101.0], date(2024, 1, 1));
    let crosses = detect_moving_average_crosses(&sma50, &flat_200(4));
    assert_eq!(crosses.golden_cross, Some(date(2024, 1, 4)));
    assert_eq!(crosses.death_cross, Some(date(2024, 1, 3)));
}

#[test]
fn test_death_state_reports_latest_death_only() {
    let sma50 = points(&[99.0, 101.0, 99.0, 101.0, 98.0], date(2024, 1, 1));
    let crosses = detect_moving_average_crosses(&sma50, &flat_200(5));
    assert_eq!(crosses.golden_cross, None);
    assert_eq!(crosses.death_cross, Some(date(2024, 1, 5)));
}

#[test]
fn test_first_golden_cross_without_any_death_cross() {
    // Touching the 200 without going below is not a death cross.
    let sma50 = points(&[99.0, 101.0, 100.0, 101.0], date(2024, 1, 1));
    let crosses = detect_moving_average_crosses(&sma50, &flat_200(4));
    assert_eq!(crosses.golden_cross, Some(date(2024, 1, 2)));
    assert_eq!(crosses.death_cross, None);
}

#[test]
fn test_golden_state_without_crossing_reports_nothing() {
    let sma50 = points(&[105.0, 106.0, 107.0], date(2024, 1, 1));
    let crosses = detect_moving_average_crosses(&sma50, &flat_200(3));
    assert_eq!(crosses.golden_cross, None);
    assert_eq!(crosses.death_cross, None);
}

#[test]
fn test_only_shared_timestamps_are_compared() {
    // Jan 2 exists only in the 50-day series; without it the cross lands on Jan 3.
    let sma50 = points(&[99.0, 101.0, 102.0], date(2024, 1, 1));
    let sma200 = vec![
        IndicatorPoint::new(100.0, sma50[0].timestamp),
        IndicatorPoint::new(100.0, sma50[2].timestamp),
    ];
    let crosses = detect_moving_average_crosses(&sma50, &sma200);
    assert_eq!(crosses.golden_cross, Some(date(2024, 1, 3)));
}

#[test]
fn test_non_overlapping_series_abort() {
    let sma50 = points(&[99.0, 101.0], date(2024, 1, 1));
    let sma200 = points(&[100.0, 100.0], date(2024, 2, 1));
    let crosses = detect_moving_average_crosses(&sma50, &sma200);
    assert_eq!(crosses.golden_cross, None);
    assert_eq!(crosses.death_cross, None);
}

#[test]
fn test_empty_series_abort() {
    let crosses = detect_moving_average_crosses(&[], &[]);
    assert_eq!(crosses.golden_cross, None);
    assert_eq!(crosses.death_cross, None);
}
