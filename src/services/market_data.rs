//! Market data provider interface: the bar series loader the core reads from.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::bars::{DailyBar, IndicatorPoint, MacdPoint};
use crate::models::indicators::MovingAverageKind;
use crate::models::report::Quote;
use crate::services::error::MarketDataError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars between `from` and `to` inclusive, in any order.
    async fn get_daily_bars(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBar>, MarketDataError>;

    /// Current price and, when the source has them, the 52-week range.
    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Latest value of a moving average, `None` if the source has no sample.
    async fn get_moving_average(
        &self,
        symbol: &str,
        kind: MovingAverageKind,
        period: u32,
    ) -> Result<Option<f64>, MarketDataError>;

    async fn get_rsi_history(
        &self,
        symbol: &str,
        period: u32,
        from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError>;

    async fn get_sma_history(
        &self,
        symbol: &str,
        period: u32,
        from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError>;

    /// MACD(12, 26, 9) samples since `from`.
    async fn get_macd_history(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<Vec<MacdPoint>, MarketDataError>;
}
