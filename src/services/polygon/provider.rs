//! Polygon-backed market data provider implementation

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use super::client::PolygonRestClient;
use super::responses::{parse_aggregates, parse_indicator_values, parse_macd_values, parse_quote};
use crate::config::ProviderConfig;
use crate::models::bars::{DailyBar, IndicatorPoint, MacdPoint};
use crate::models::indicators::MovingAverageKind;
use crate::models::report::Quote;
use crate::services::error::MarketDataError;
use crate::services::market_data::MarketDataProvider;

const HISTORY_LIMIT: &str = "5000";

pub struct PolygonMarketDataProvider {
    client: PolygonRestClient,
}

impl PolygonMarketDataProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, MarketDataError> {
        Ok(Self {
            client: PolygonRestClient::new(config)?,
        })
    }

    pub fn with_client(client: PolygonRestClient) -> Self {
        Self { client }
    }

    async fn indicator_history(
        &self,
        indicator: &str,
        symbol: &str,
        mut query: Vec<(&str, String)>,
        from: NaiveDate,
    ) -> Result<serde_json::Value, MarketDataError> {
        query.extend([
            ("timespan", "day".to_string()),
            ("series_type", "close".to_string()),
            ("order", "desc".to_string()),
            ("limit", HISTORY_LIMIT.to_string()),
            ("timestamp.gte", from.to_string()),
        ]);
        let url = self
            .client
            .polygon_url(&["v1", "indicators", indicator, symbol], &query)?;
        self.client.get_json(url).await
    }
}

#[async_trait]
impl MarketDataProvider for PolygonMarketDataProvider {
    async fn get_daily_bars(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBar>, MarketDataError> {
        let from = from.to_string();
        let to = to.to_string();
        let url = self.client.polygon_url(
            &["v2", "aggs", "ticker", symbol, "range", "1", "day", &from, &to],
            &[
                ("adjusted", "true".to_string()),
                ("sort", "asc".to_string()),
                ("limit", HISTORY_LIMIT.to_string()),
            ],
        )?;
        let body = self.client.get_json(url).await?;
        let bars = parse_aggregates(&body);
        debug!(symbol = %symbol, count = bars.len(), "Fetched daily bars");
        Ok(bars)
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let url = self.client.quote_url(symbol)?;
        let body = self.client.get_json(url).await?;
        parse_quote(symbol, &body)
    }

    async fn get_moving_average(
        &self,
        symbol: &str,
        kind: MovingAverageKind,
        period: u32,
    ) -> Result<Option<f64>, MarketDataError> {
        let url = self.client.polygon_url(
            &["v1", "indicators", kind.as_str(), symbol],
            &[
                ("timespan", "day".to_string()),
                ("window", period.to_string()),
                ("series_type", "close".to_string()),
                ("order", "desc".to_string()),
                ("limit", "1".to_string()),
            ],
        )?;
        let body = self.client.get_json(url).await?;
        let latest = parse_indicator_values(&body)
            .into_iter()
            .max_by_key(|point| point.timestamp)
            .map(|point| point.value);
        Ok(latest)
    }

    async fn get_rsi_history(
        &self,
        symbol: &str,
        period: u32,
        from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError> {
        let body = self
            .indicator_history("rsi", symbol, vec![("window", period.to_string())], from)
            .await?;
        Ok(parse_indicator_values(&body))
    }

    async fn get_sma_history(
        &self,
        symbol: &str,
        period: u32,
        from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError> {
        let body = self
            .indicator_history("sma", symbol, vec![("window", period.to_string())], from)
            .await?;
        Ok(parse_indicator_values(&body))
    }

    async fn get_macd_history(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<Vec<MacdPoint>, MarketDataError> {
        let query = vec![
            ("short_window", "12".to_string()),
            ("long_window", "26".to_string()),
            ("signal_window", "9".to_string()),
        ];
        let body = self.indicator_history("macd", symbol, query, from).await?;
        Ok(parse_macd_values(&body))
    }
}
