//! Percent return between two dates of a daily bar series

use chrono::{DateTime, Months, Utc};
use tracing::debug;

use crate::models::bars::{sorted_ascending, DailyBar};

/// Percent return from the bar at `start_ms` to the bar at `end_ms`.
///
/// Start resolves to the first bar on/after `start_ms`, falling back to the
/// closest earlier bar; end resolves to the last bar on/before `end_ms`,
/// falling back to the first later bar. Weekends and holidays are tolerated
/// that way. Returns `None` for an empty series, non-positive closes, an
/// inverted period, or when both ends land on the same bar.
pub fn calculate_period_return(bars: &[DailyBar], start_ms: i64, end_ms: i64) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }

    let sorted = sorted_ascending(bars);

    let start_idx = sorted
        .iter()
        .position(|bar| bar.timestamp >= start_ms)
        .or_else(|| sorted.iter().rposition(|bar| bar.timestamp < start_ms))
        .unwrap_or(0);

    let end_idx = sorted
        .iter()
        .rposition(|bar| bar.timestamp <= end_ms)
        .or_else(|| sorted.iter().position(|bar| bar.timestamp > end_ms))
        .unwrap_or(sorted.len() - 1);

    let start = &sorted[start_idx];
    let end = &sorted[end_idx];

    if !(start.close.is_finite() && start.close > 0.0 && end.close.is_finite() && end.close > 0.0)
    {
        debug!(
            start_close = start.close,
            end_close = end.close,
            "Period return skipped: invalid close"
        );
        return None;
    }

    if start.timestamp > end.timestamp {
        debug!(
            start = start.timestamp,
            end = end.timestamp,
            "Period return skipped: start bar after end bar"
        );
        return None;
    }

    if start_idx == end_idx {
        debug!(timestamp = start.timestamp, "Period return skipped: zero-length period");
        return None;
    }

    let pct = (end.close - start.close) / start.close * 100.0;
    pct.is_finite().then_some(pct)
}

/// Trailing return over `months` ending at `now`.
pub fn calculate_trailing_return(
    bars: &[DailyBar],
    months: u32,
    now: DateTime<Utc>,
) -> Option<f64> {
    let start = now.checked_sub_months(Months::new(months))?;
    calculate_period_return(bars, start.timestamp_millis(), now.timestamp_millis())
}
