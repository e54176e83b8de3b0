//! Unit tests for recent swing high/low dates

use chrono::Duration;

use crate::fixtures::{bars_from_closes, series_start};
use wgo_technicals::turning_points::detect_recent_swings;

fn closes_with(overrides: &[(usize, f64)], len: usize) -> Vec<f64> {
    let mut closes = vec![10.0; len];
    for &(idx, close) in overrides {
        closes[idx] = close;
    }
    closes
}

#[test]
fn test_extreme_swings_within_window() {
    let closes = closes_with(&[(10, 50.0), (40, 20.0), (55, 25.0), (45, 5.0), (60, 3.0)], 80);
    let bars = bars_from_closes(&closes, series_start());
    let swings = detect_recent_swings(&bars, 60, 2);
    assert_eq!(swings.high, Some(series_start() + Duration::days(55)));
    assert_eq!(swings.low, Some(series_start() + Duration::days(60)));
}

#[test]
fn test_equal_swing_highs_keep_earlier() {
    let closes = closes_with(&[(40, 20.0), (50, 20.0)], 80);
    let bars = bars_from_closes(&closes, series_start());
    let swings = detect_recent_swings(&bars, 60, 2);
    assert_eq!(swings.high, Some(series_start() + Duration::days(40)));
    assert_eq!(swings.low, None);
}

#[test]
fn test_flat_series_has_no_swings() {
    let bars = bars_from_closes(&[10.0; 60], series_start());
    let swings = detect_recent_swings(&bars, 60, 2);
    assert_eq!(swings.high, None);
    assert_eq!(swings.low, None);
}

#[test]
fn test_short_series_uses_all_bars() {
    let closes = closes_with(&[(4, 15.0)], 10);
    let mut bars = bars_from_closes(&closes, series_start());
    bars.reverse();
    let swings = detect_recent_swings(&bars, 60, 2);
    assert_eq!(swings.high, Some(series_start() + Duration::days(4)));
}
