//! Most extreme recent swing high and swing low

use chrono::NaiveDate;

use crate::indicators::structure::swing::{find_swing_highs, find_swing_lows};
use crate::models::bars::{sorted_ascending, timestamp_to_date, DailyBar};
use crate::models::levels::SwingPoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwingDates {
    pub high: Option<NaiveDate>,
    pub low: Option<NaiveDate>,
}

/// Dates of the highest swing high and lowest swing low among the most recent
/// `window` bars, using a `radius`-bar symmetric test. Earlier swings win ties.
pub fn detect_recent_swings(bars: &[DailyBar], window: usize, radius: usize) -> SwingDates {
    let sorted = sorted_ascending(bars);
    let recent = &sorted[sorted.len().saturating_sub(window)..];

    let highest = pick(find_swing_highs(recent, radius), |candidate, best| candidate > best);
    let lowest = pick(find_swing_lows(recent, radius), |candidate, best| candidate < best);

    SwingDates {
        high: highest.and_then(|swing| timestamp_to_date(swing.timestamp)),
        low: lowest.and_then(|swing| timestamp_to_date(swing.timestamp)),
    }
}

fn pick(swings: Vec<SwingPoint>, better: impl Fn(f64, f64) -> bool) -> Option<SwingPoint> {
    swings.into_iter().fold(None, |best, swing| match best {
        Some(current) if !better(swing.price, current.price) => Some(current),
        _ => Some(swing),
    })
}
