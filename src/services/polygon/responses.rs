//! Decoding upstream JSON into typed records.
//!
//! Rows missing a required field are skipped rather than failing the whole
//! series.

use serde_json::Value;
use tracing::debug;

use crate::models::bars::{DailyBar, IndicatorPoint, MacdPoint};
use crate::models::report::Quote;
use crate::services::aliases::{
    BAR_CLOSE, BAR_HIGH, BAR_LOW, MACD_HISTOGRAM, MACD_SIGNAL, QUOTE_52_WEEK_HIGH,
    QUOTE_52_WEEK_LOW, QUOTE_PRICE, SAMPLE_TIMESTAMP, SAMPLE_VALUE,
};
use crate::services::error::MarketDataError;

/// `{"results": [{"h", "l", "c", "t", ...}]}`
pub fn parse_aggregates(body: &Value) -> Vec<DailyBar> {
    rows(body.get("results"))
        .filter_map(|row| {
            let bar = DailyBar::new(
                BAR_HIGH.resolve_f64(row)?,
                BAR_LOW.resolve_f64(row)?,
                BAR_CLOSE.resolve_f64(row)?,
                SAMPLE_TIMESTAMP.resolve_i64(row)?,
            );
            Some(bar)
        })
        .collect()
}

/// `{"results": {"values": [{"timestamp", "value"}]}}`
pub fn parse_indicator_values(body: &Value) -> Vec<IndicatorPoint> {
    let values = body.get("results").and_then(|r| r.get("values"));
    let parsed: Vec<IndicatorPoint> = rows(values)
        .filter_map(|row| {
            Some(IndicatorPoint::new(
                SAMPLE_VALUE.resolve_f64(row)?,
                SAMPLE_TIMESTAMP.resolve_i64(row)?,
            ))
        })
        .collect();
    log_skipped(values, parsed.len());
    parsed
}

/// `{"results": {"values": [{"timestamp", "value", "signal", "histogram"}]}}`
pub fn parse_macd_values(body: &Value) -> Vec<MacdPoint> {
    let values = body.get("results").and_then(|r| r.get("values"));
    let parsed: Vec<MacdPoint> = rows(values)
        .filter_map(|row| {
            let macd = SAMPLE_VALUE.resolve_f64(row)?;
            let signal = MACD_SIGNAL.resolve_f64(row)?;
            Some(MacdPoint {
                macd,
                signal,
                histogram: MACD_HISTOGRAM.resolve_f64(row).unwrap_or(macd - signal),
                timestamp: SAMPLE_TIMESTAMP.resolve_i64(row)?,
            })
        })
        .collect();
    log_skipped(values, parsed.len());
    parsed
}

/// Delayed-quote payload keyed by symbol: `{"AAPL": {...}}`. A bare object
/// or a single-element array is accepted as well.
pub fn parse_quote(symbol: &str, body: &Value) -> Result<Quote, MarketDataError> {
    let record = body
        .get(symbol)
        .or_else(|| body.as_array().and_then(|items| items.first()))
        .unwrap_or(body);

    if !record.is_object() {
        return Err(MarketDataError::Empty(symbol.to_string()));
    }

    Ok(Quote {
        symbol: symbol.to_string(),
        price: QUOTE_PRICE.require_f64(record)?,
        fifty_two_week_high: QUOTE_52_WEEK_HIGH.resolve_f64(record),
        fifty_two_week_low: QUOTE_52_WEEK_LOW.resolve_f64(record),
    })
}

fn rows(value: Option<&Value>) -> impl Iterator<Item = &Value> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flat_map(|items| items.iter())
}

fn log_skipped(values: Option<&Value>, kept: usize) {
    let total = values.and_then(Value::as_array).map_or(0, Vec::len);
    if total > kept {
        debug!(total, kept, "Skipped indicator samples with missing fields");
    }
}
