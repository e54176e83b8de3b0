//! Raw time-series records supplied by the bar series loader.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One trading day's summary. `timestamp` is epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub timestamp: i64,
}

impl DailyBar {
    pub fn new(high: f64, low: f64, close: f64, timestamp: i64) -> Self {
        Self {
            high,
            low,
            close,
            timestamp,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        timestamp_to_date(self.timestamp)
    }
}

/// A single sample of a scalar indicator series (RSI, SMA-50, SMA-200).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub value: f64,
    pub timestamp: i64,
}

impl IndicatorPoint {
    pub fn new(value: f64, timestamp: i64) -> Self {
        Self { value, timestamp }
    }
}

/// A single MACD sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub timestamp: i64,
}

impl MacdPoint {
    pub fn new(macd: f64, signal: f64, timestamp: i64) -> Self {
        Self {
            macd,
            signal,
            histogram: macd - signal,
            timestamp,
        }
    }
}

/// UTC calendar day of an epoch-millisecond timestamp.
pub fn timestamp_to_date(timestamp_ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|dt| dt.date_naive())
}

/// Epoch milliseconds of midnight UTC on `date`.
pub fn date_to_timestamp(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Returns a copy of `bars` ordered oldest first.
pub fn sorted_ascending(bars: &[DailyBar]) -> Vec<DailyBar> {
    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|bar| bar.timestamp);
    sorted
}

/// Returns a copy of `bars` ordered newest first.
pub fn sorted_descending(bars: &[DailyBar]) -> Vec<DailyBar> {
    let mut sorted = bars.to_vec();
    sorted.sort_by_key(|bar| std::cmp::Reverse(bar.timestamp));
    sorted
}
