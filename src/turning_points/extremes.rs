//! Dates on which the 52-week high and low were printed

use chrono::NaiveDate;

use crate::models::bars::DailyBar;

const FLOAT_SLACK: f64 = 1e-9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtremeDates {
    pub high: Option<NaiveDate>,
    pub low: Option<NaiveDate>,
}

/// Latest bar whose `high` is within `tolerance` of `fifty_two_week_high`, and
/// likewise on `low`. No date is reported if no bar reaches the tolerance.
pub fn detect_extreme_dates(
    bars: &[DailyBar],
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
    tolerance: f64,
) -> ExtremeDates {
    ExtremeDates {
        high: fifty_two_week_high
            .filter(|v| v.is_finite())
            .and_then(|high| latest_bar_near(bars, high, tolerance, |bar| bar.high)),
        low: fifty_two_week_low
            .filter(|v| v.is_finite())
            .and_then(|low| latest_bar_near(bars, low, tolerance, |bar| bar.low)),
    }
}

fn latest_bar_near(
    bars: &[DailyBar],
    target: f64,
    tolerance: f64,
    price: fn(&DailyBar) -> f64,
) -> Option<NaiveDate> {
    bars.iter()
        .filter(|bar| (price(bar) - target).abs() <= tolerance + FLOAT_SLACK)
        .max_by_key(|bar| bar.timestamp)
        .and_then(DailyBar::date)
}

/// Max `high` and min `low` over the series, for quotes that lack them.
pub fn derive_fifty_two_week_range(bars: &[DailyBar]) -> (Option<f64>, Option<f64>) {
    let high = bars
        .iter()
        .map(|bar| bar.high)
        .filter(|v| v.is_finite())
        .reduce(f64::max);
    let low = bars
        .iter()
        .map(|bar| bar.low)
        .filter(|v| v.is_finite())
        .reduce(f64::min);
    (high, low)
}
