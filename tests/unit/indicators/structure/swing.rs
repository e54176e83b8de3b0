//! Unit tests for swing detection

use crate::fixtures::{day_offset, series_start};
use wgo_technicals::indicators::structure::{find_swing_highs, find_swing_lows};
use wgo_technicals::models::DailyBar;

fn bars_from_highs(highs: &[f64]) -> Vec<DailyBar> {
    highs
        .iter()
        .enumerate()
        .map(|(i, &high)| {
            DailyBar::new(
                high,
                high - 1.0,
                high - 0.5,
                day_offset(series_start(), i as i64),
            )
        })
        .collect()
}

#[test]
fn test_single_peak_is_swing_high() {
    let bars = bars_from_highs(&[1.0, 2.0, 3.0, 10.0, 3.0, 2.0, 1.0]);
    let swings = find_swing_highs(&bars, 2);
    assert_eq!(swings.len(), 1);
    assert_eq!(swings[0].price, 10.0);
    assert_eq!(swings[0].timestamp, bars[3].timestamp);
}

#[test]
fn test_plateau_is_not_a_swing() {
    let bars = bars_from_highs(&[1.0, 2.0, 10.0, 10.0, 2.0, 1.0, 0.5]);
    assert!(find_swing_highs(&bars, 2).is_empty());
}

#[test]
fn test_edge_bars_are_not_candidates() {
    let bars = bars_from_highs(&[10.0, 2.0, 3.0, 4.0, 5.0, 6.0, 20.0]);
    assert!(find_swing_highs(&bars, 2).is_empty());
}

#[test]
fn test_insufficient_bars_yield_no_swings() {
    let bars = bars_from_highs(&[1.0, 5.0, 1.0]);
    assert!(find_swing_highs(&bars, 2).is_empty());
    assert!(find_swing_lows(&bars, 2).is_empty());
}

#[test]
fn test_trough_is_swing_low() {
    let bars = bars_from_highs(&[9.0, 8.0, 7.0, 3.0, 7.0, 8.0, 9.0]);
    let swings = find_swing_lows(&bars, 2);
    assert_eq!(swings.len(), 1);
    assert_eq!(swings[0].price, 2.0);
}
