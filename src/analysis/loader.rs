//! Concurrent fetch of every series the analyzer needs.
//!
//! Only the quote is required. Any other failed fetch is logged and replaced
//! by an empty series or a missing value, which the core treats as
//! insufficient data.

use chrono::{Months, NaiveDate};
use futures_util::future::join_all;
use std::fmt::Display;
use tracing::{info, warn};

use crate::analysis::engine::RSI_PERIOD;
use crate::analysis::input::AnalysisInput;
use crate::config::AnalysisConfig;
use crate::indicators::validation::sanitize_bars;
use crate::models::indicators::{IndicatorSet, MovingAverageKind};
use crate::services::error::MarketDataError;
use crate::services::market_data::MarketDataProvider;

pub async fn load_analysis_input<P>(
    provider: &P,
    symbol: &str,
    config: &AnalysisConfig,
    today: NaiveDate,
) -> Result<AnalysisInput, MarketDataError>
where
    P: MarketDataProvider + ?Sized,
{
    let from = today
        .checked_sub_months(Months::new(config.return_lookback_months))
        .unwrap_or(today);

    let moving_average_requests: Vec<(MovingAverageKind, u32)> = config
        .sma_periods
        .iter()
        .map(|&period| (MovingAverageKind::Sma, period))
        .chain(
            config
                .ema_periods
                .iter()
                .map(|&period| (MovingAverageKind::Ema, period)),
        )
        .collect();

    let moving_averages = join_all(moving_average_requests.iter().map(
        |&(kind, period)| async move {
            let value = provider.get_moving_average(symbol, kind, period).await;
            (kind, period, value)
        },
    ));

    let (quote, bars, rsi_history, sma50_history, sma200_history, macd_history, moving_averages) =
        tokio::join!(
            provider.get_quote(symbol),
            provider.get_daily_bars(symbol, from, today),
            provider.get_rsi_history(symbol, RSI_PERIOD, from),
            provider.get_sma_history(symbol, 50, from),
            provider.get_sma_history(symbol, 200, from),
            provider.get_macd_history(symbol, from),
            moving_averages,
        );

    let quote = quote.map_err(|e| {
        warn!(symbol = %symbol, error = %e, "Quote unavailable, cannot analyze");
        e
    })?;

    let mut indicators = IndicatorSet::new();
    for (kind, period, value) in moving_averages {
        if let Some(value) = degrade(symbol, "moving average", value).flatten() {
            indicators = match kind {
                MovingAverageKind::Sma => indicators.with_sma(period, value),
                MovingAverageKind::Ema => indicators.with_ema(period, value),
            };
        }
    }

    let bars = sanitize_bars(degrade(symbol, "daily bars", bars).unwrap_or_default());

    let input = AnalysisInput::new(symbol, quote.price)
        .with_fifty_two_week_range(quote.fifty_two_week_high, quote.fifty_two_week_low)
        .with_bars(bars)
        .with_indicators(indicators)
        .with_rsi_history(degrade(symbol, "RSI history", rsi_history).unwrap_or_default())
        .with_sma_history(
            degrade(symbol, "SMA-50 history", sma50_history).unwrap_or_default(),
            degrade(symbol, "SMA-200 history", sma200_history).unwrap_or_default(),
        )
        .with_macd_history(degrade(symbol, "MACD history", macd_history).unwrap_or_default());

    info!(
        symbol = %symbol,
        price = input.current_price,
        bars = input.bars.len(),
        rsi_samples = input.rsi_history.len(),
        macd_samples = input.macd_history.len(),
        "Loaded analysis input"
    );

    Ok(input)
}

fn degrade<T, E: Display>(symbol: &str, series: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                symbol = %symbol,
                series = series,
                error = %e,
                "Fetch failed, continuing without it"
            );
            None
        }
    }
}
