//! Runs every core computation over one `AnalysisInput`.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::analysis::input::AnalysisInput;
use crate::config::AnalysisConfig;
use crate::indicators::performance::calculate_trailing_return;
use crate::indicators::structure::calculate_support_resistance;
use crate::indicators::trend::{
    calculate_ma_relationships, classify_long_term_crossover, classify_short_term_crossover,
};
use crate::models::bars::{IndicatorPoint, MacdPoint};
use crate::models::indicators::{MacdIndicator, RsiIndicator};
use crate::models::report::TechnicalReport;
use crate::turning_points::{derive_fifty_two_week_range, detect_turning_points, TurningPointInput};

pub const RSI_PERIOD: u32 = 14;
pub const MACD_PERIODS: (u32, u32, u32) = (12, 26, 9);

pub struct TechnicalAnalyzer {
    config: AnalysisConfig,
}

impl TechnicalAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze against the wall clock.
    pub fn analyze(&self, input: &AnalysisInput) -> TechnicalReport {
        self.analyze_at(input, Utc::now())
    }

    /// Analyze as of `now`, which drives level recency and the trailing return.
    pub fn analyze_at(&self, input: &AnalysisInput, now: DateTime<Utc>) -> TechnicalReport {
        let config = &self.config;
        let price = input.current_price;

        let (derived_high, derived_low) = derive_fifty_two_week_range(&input.bars);
        let fifty_two_week_high = input.fifty_two_week_high.or(derived_high);
        let fifty_two_week_low = input.fifty_two_week_low.or(derived_low);

        let levels = calculate_support_resistance(&input.bars, price, config, now);

        let turning_points = detect_turning_points(
            &TurningPointInput {
                bars: &input.bars,
                rsi_history: &input.rsi_history,
                sma50_history: &input.sma50_history,
                sma200_history: &input.sma200_history,
                macd_history: &input.macd_history,
                support: levels.support,
                resistance: levels.resistance,
                fifty_two_week_high,
                fifty_two_week_low,
            },
            config,
        );

        let twelve_month_return =
            calculate_trailing_return(&input.bars, config.return_lookback_months, now);

        let indicators = &input.indicators;
        let moving_averages = calculate_ma_relationships(
            price,
            indicators,
            &config.sma_periods,
            &config.ema_periods,
        );
        let short_term_crossover =
            classify_short_term_crossover(indicators.sma(20), indicators.sma(50));
        let long_term_crossover =
            classify_long_term_crossover(indicators.sma(50), indicators.sma(200), &turning_points);

        let rsi = indicators
            .rsi
            .clone()
            .or_else(|| latest_rsi(&input.rsi_history));
        let macd = indicators
            .macd
            .clone()
            .or_else(|| latest_macd(&input.macd_history));

        debug!(symbol = %input.symbol, ?levels, ?twelve_month_return, "Core analysis complete");
        info!(
            symbol = %input.symbol,
            bars = input.bars.len(),
            events = turning_points.event_count(),
            "Technical report generated"
        );

        TechnicalReport {
            symbol: input.symbol.clone(),
            current_price: price,
            support: levels.support,
            resistance: levels.resistance,
            twelve_month_return,
            fifty_two_week_high,
            fifty_two_week_low,
            rsi,
            macd,
            moving_averages,
            short_term_crossover,
            long_term_crossover,
            turning_points,
            generated_at: now,
        }
    }
}

impl Default for TechnicalAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

fn latest_rsi(history: &[IndicatorPoint]) -> Option<RsiIndicator> {
    history
        .iter()
        .filter(|point| point.value.is_finite())
        .max_by_key(|point| point.timestamp)
        .map(|point| RsiIndicator {
            value: point.value,
            period: Some(RSI_PERIOD),
        })
}

fn latest_macd(history: &[MacdPoint]) -> Option<MacdIndicator> {
    history
        .iter()
        .max_by_key(|point| point.timestamp)
        .map(|point| MacdIndicator {
            macd: point.macd,
            signal: point.signal,
            histogram: point.histogram,
            period: Some(MACD_PERIODS),
        })
}
