//! Sanity checks applied to bars before they reach the core.

use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::models::bars::DailyBar;

pub fn validate_price(field: &'static str, value: f64) -> Result<f64, IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::NonFinite(field));
    }
    if value <= 0.0 {
        return Err(IndicatorError::NonPositivePrice { field, value });
    }
    Ok(value)
}

pub fn validate_bar(bar: &DailyBar) -> Result<(), IndicatorError> {
    validate_price("high", bar.high)?;
    validate_price("low", bar.low)?;
    validate_price("close", bar.close)?;
    if bar.low > bar.high {
        return Err(IndicatorError::InvertedBar {
            low: bar.low,
            high: bar.high,
        });
    }
    if bar.date().is_none() {
        return Err(IndicatorError::InvalidTimestamp(bar.timestamp));
    }
    Ok(())
}

/// Drops bars that fail [`validate_bar`], keeping the rest in input order.
pub fn sanitize_bars(bars: Vec<DailyBar>) -> Vec<DailyBar> {
    let before = bars.len();
    let kept: Vec<DailyBar> = bars
        .into_iter()
        .filter(|bar| match validate_bar(bar) {
            Ok(()) => true,
            Err(e) => {
                debug!(timestamp = bar.timestamp, error = %e, "Dropping invalid bar");
                false
            }
        })
        .collect();
    if kept.len() != before {
        debug!(dropped = before - kept.len(), kept = kept.len(), "Sanitized bar series");
    }
    kept
}
