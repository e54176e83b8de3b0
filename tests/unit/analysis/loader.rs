//! Unit tests for the concurrent analysis input loader

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::fixtures::{bars_from_closes, date, macd_points, points};
use wgo_technicals::analysis::load_analysis_input;
use wgo_technicals::config::AnalysisConfig;
use wgo_technicals::models::{
    DailyBar, IndicatorPoint, MacdPoint, MovingAverageKind, Quote,
};
use wgo_technicals::services::{MarketDataError, MarketDataProvider};

#[derive(Default)]
struct FakeProvider {
    fail_quote: bool,
    fail_bars: bool,
    fail_macd: bool,
}

fn unavailable(what: &str) -> MarketDataError {
    MarketDataError::Status {
        status: 503,
        endpoint: what.to_string(),
    }
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    async fn get_daily_bars(
        &self,
        _symbol: &str,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<DailyBar>, MarketDataError> {
        if self.fail_bars {
            return Err(unavailable("bars"));
        }
        let mut bars = bars_from_closes(&[100.0, 101.0, 102.0], date(2024, 1, 2));
        bars.push(DailyBar::new(f64::NAN, 1.0, 1.0, 0));
        Ok(bars)
    }

    async fn get_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        if self.fail_quote {
            return Err(unavailable("quote"));
        }
        Ok(Quote {
            symbol: symbol.to_string(),
            price: 102.5,
            fifty_two_week_high: Some(130.0),
            fifty_two_week_low: None,
        })
    }

    async fn get_moving_average(
        &self,
        _symbol: &str,
        kind: MovingAverageKind,
        period: u32,
    ) -> Result<Option<f64>, MarketDataError> {
        match (kind, period) {
            (MovingAverageKind::Sma, 100) => Err(unavailable("sma100")),
            (MovingAverageKind::Ema, 200) => Ok(None),
            _ => Ok(Some(period as f64)),
        }
    }

    async fn get_rsi_history(
        &self,
        _symbol: &str,
        _period: u32,
        _from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError> {
        Ok(points(&[45.0, 50.0], date(2024, 1, 2)))
    }

    async fn get_sma_history(
        &self,
        _symbol: &str,
        period: u32,
        _from: NaiveDate,
    ) -> Result<Vec<IndicatorPoint>, MarketDataError> {
        Ok(points(&[period as f64], date(2024, 1, 2)))
    }

    async fn get_macd_history(
        &self,
        _symbol: &str,
        _from: NaiveDate,
    ) -> Result<Vec<MacdPoint>, MarketDataError> {
        if self.fail_macd {
            return Err(unavailable("macd"));
        }
        Ok(macd_points(&[(0.1, 0.2)], date(2024, 1, 2)))
    }
}

#[tokio::test]
async fn test_loads_every_series() {
    let provider = FakeProvider::default();
    let input = load_analysis_input(
        &provider,
        "ACME",
        &AnalysisConfig::default(),
        date(2024, 6, 28),
    )
    .await
    .expect("input");

    assert_eq!(input.symbol, "ACME");
    assert_eq!(input.current_price, 102.5);
    assert_eq!(input.fifty_two_week_high, Some(130.0));
    assert_eq!(input.fifty_two_week_low, None);
    assert_eq!(input.bars.len(), 3, "invalid bar is dropped");
    assert_eq!(input.rsi_history.len(), 2);
    assert_eq!(input.sma50_history[0].value, 50.0);
    assert_eq!(input.sma200_history[0].value, 200.0);
    assert_eq!(input.macd_history.len(), 1);
}

#[tokio::test]
async fn test_moving_average_failures_leave_slots_empty() {
    let provider = FakeProvider::default();
    let input = load_analysis_input(
        &provider,
        "ACME",
        &AnalysisConfig::default(),
        date(2024, 6, 28),
    )
    .await
    .expect("input");

    assert_eq!(input.indicators.sma(20), Some(20.0));
    assert_eq!(input.indicators.sma(100), None);
    assert_eq!(input.indicators.ema(50), Some(50.0));
    assert_eq!(input.indicators.ema(200), None);
}

#[tokio::test]
async fn test_failed_series_degrade_to_empty() {
    let provider = FakeProvider {
        fail_bars: true,
        fail_macd: true,
        ..FakeProvider::default()
    };
    let input = load_analysis_input(
        &provider,
        "ACME",
        &AnalysisConfig::default(),
        date(2024, 6, 28),
    )
    .await
    .expect("input");

    assert!(input.bars.is_empty());
    assert!(input.macd_history.is_empty());
    assert_eq!(input.rsi_history.len(), 2);
}

#[tokio::test]
async fn test_quote_failure_is_fatal() {
    let provider = FakeProvider {
        fail_quote: true,
        ..FakeProvider::default()
    };
    let result =
        load_analysis_input(&provider, "ACME", &AnalysisConfig::default(), date(2024, 6, 28)).await;
    assert!(matches!(result, Err(MarketDataError::Status { status: 503, .. })));
}
