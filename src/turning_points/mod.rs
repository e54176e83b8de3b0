//! Turning-point detection: dated technical events found in historical series.
//!
//! Every sub-check is independent. Missing or non-overlapping data leaves the
//! corresponding fields empty without affecting the others.

pub mod breaks;
pub mod extremes;
pub mod macd;
pub mod moving_average_cross;
pub mod rsi;
pub mod swings;

pub use breaks::*;
pub use extremes::*;
pub use macd::*;
pub use moving_average_cross::*;
pub use rsi::*;
pub use swings::*;

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::models::bars::{DailyBar, IndicatorPoint, MacdPoint};
use crate::models::turning_points::TurningPoints;

/// Everything the detector reads. All series are request-scoped and may be
/// empty.
#[derive(Debug, Clone, Copy)]
pub struct TurningPointInput<'a> {
    pub bars: &'a [DailyBar],
    pub rsi_history: &'a [IndicatorPoint],
    pub sma50_history: &'a [IndicatorPoint],
    pub sma200_history: &'a [IndicatorPoint],
    pub macd_history: &'a [MacdPoint],
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}

pub fn detect_turning_points(
    input: &TurningPointInput<'_>,
    config: &AnalysisConfig,
) -> TurningPoints {
    let rsi = detect_rsi_crossings(input.rsi_history, config.rsi_overbought, config.rsi_oversold);
    let crosses = detect_moving_average_crosses(input.sma50_history, input.sma200_history);
    let macd = detect_macd_crossings(input.macd_history);
    let swings = detect_recent_swings(
        input.bars,
        config.narrative_swing_bars,
        config.narrative_swing_radius,
    );
    let extremes = detect_extreme_dates(
        input.bars,
        input.fifty_two_week_high,
        input.fifty_two_week_low,
        config.extreme_tolerance,
    );
    let breaks = detect_level_breaks(input.bars, input.support, input.resistance);

    let turning_points = TurningPoints {
        rsi_overbought_date: rsi.overbought,
        rsi_oversold_date: rsi.oversold,
        golden_cross_date: crosses.golden_cross,
        death_cross_date: crosses.death_cross,
        macd_bullish_cross_date: macd.bullish,
        macd_bearish_cross_date: macd.bearish,
        macd_zero_cross_up_date: macd.zero_cross_up,
        macd_zero_cross_down_date: macd.zero_cross_down,
        swing_high_date: swings.high,
        swing_low_date: swings.low,
        fifty_two_week_high_date: extremes.high,
        fifty_two_week_low_date: extremes.low,
        resistance_break_date: breaks.resistance,
        support_break_date: breaks.support,
    };

    debug!(
        bars = input.bars.len(),
        rsi_samples = input.rsi_history.len(),
        macd_samples = input.macd_history.len(),
        ?turning_points,
        "Turning points detected"
    );

    turning_points
}
