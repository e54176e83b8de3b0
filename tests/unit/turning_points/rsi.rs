//! Unit tests for RSI threshold crossings

use crate::fixtures::{date, points};
use wgo_technicals::turning_points::detect_rsi_crossings;

#[test]
fn test_most_recent_overbought_crossing_wins() {
    let history = points(&[65.0, 72.0, 68.0, 75.0], date(2024, 3, 1));
    let crossings = detect_rsi_crossings(&history, 70.0, 30.0);
    assert_eq!(crossings.overbought, Some(date(2024, 3, 4)));
    assert_eq!(crossings.oversold, None);
}

#[test]
fn test_most_recent_oversold_crossing_wins() {
    let history = points(&[35.0, 28.0, 40.0, 25.0, 27.0], date(2024, 3, 1));
    let crossings = detect_rsi_crossings(&history, 70.0, 30.0);
    assert_eq!(crossings.oversold, Some(date(2024, 3, 4)));
}

#[test]
fn test_thresholds_are_inclusive() {
    let history = points(&[69.9, 70.0, 31.0, 30.0], date(2024, 3, 1));
    let crossings = detect_rsi_crossings(&history, 70.0, 30.0);
    assert_eq!(crossings.overbought, Some(date(2024, 3, 2)));
    assert_eq!(crossings.oversold, Some(date(2024, 3, 4)));
}

#[test]
fn test_staying_in_zone_is_not_a_crossing() {
    let history = points(&[75.0, 80.0, 78.0], date(2024, 3, 1));
    let crossings = detect_rsi_crossings(&history, 70.0, 30.0);
    assert_eq!(crossings.overbought, None);
}

#[test]
fn test_unsorted_history_is_sorted() {
    let mut history = points(&[65.0, 72.0, 68.0, 75.0], date(2024, 3, 1));
    history.reverse();
    let crossings = detect_rsi_crossings(&history, 70.0, 30.0);
    assert_eq!(crossings.overbought, Some(date(2024, 3, 4)));
}

#[test]
fn test_empty_history_yields_nothing() {
    let crossings = detect_rsi_crossings(&[], 70.0, 30.0);
    assert_eq!(crossings.overbought, None);
    assert_eq!(crossings.oversold, None);
}
