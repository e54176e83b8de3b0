//! Unit tests for MACD crossings

use crate::fixtures::{date, macd_points};
use wgo_technicals::turning_points::detect_macd_crossings;

#[test]
fn test_earliest_instance_of_each_event() {
    let history = macd_points(
        &[(-1.0, 0.0), (0.5, 0.0), (-0.5, 0.0), (1.0, 0.0), (-2.0, 0.0)],
        date(2024, 6, 3),
    );
    let crossings = detect_macd_crossings(&history);
    assert_eq!(crossings.bullish, Some(date(2024, 6, 4)));
    assert_eq!(crossings.zero_cross_up, Some(date(2024, 6, 4)));
    assert_eq!(crossings.bearish, Some(date(2024, 6, 5)));
    assert_eq!(crossings.zero_cross_down, Some(date(2024, 6, 5)));
}

#[test]
fn test_signal_and_zero_crossings_are_independent() {
    // MACD rises through its signal line while staying negative.
    let history = macd_points(&[(-2.0, -1.0), (-0.5, -1.0)], date(2024, 6, 3));
    let crossings = detect_macd_crossings(&history);
    assert_eq!(crossings.bullish, Some(date(2024, 6, 4)));
    assert_eq!(crossings.zero_cross_up, None);
    assert_eq!(crossings.bearish, None);
}

#[test]
fn test_single_sample_yields_nothing() {
    let history = macd_points(&[(1.0, 0.0)], date(2024, 6, 3));
    assert_eq!(detect_macd_crossings(&history), Default::default());
}
