use serde::{Deserialize, Serialize};

use crate::models::bars::{DailyBar, IndicatorPoint, MacdPoint};
use crate::models::indicators::IndicatorSet;

/// Fully materialised, request-scoped inputs for one symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub symbol: String,
    pub current_price: f64,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub bars: Vec<DailyBar>,
    pub indicators: IndicatorSet,
    pub rsi_history: Vec<IndicatorPoint>,
    pub sma50_history: Vec<IndicatorPoint>,
    pub sma200_history: Vec<IndicatorPoint>,
    pub macd_history: Vec<MacdPoint>,
}

impl AnalysisInput {
    pub fn new(symbol: impl Into<String>, current_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current_price,
            ..Self::default()
        }
    }

    pub fn with_bars(mut self, bars: Vec<DailyBar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn with_fifty_two_week_range(mut self, high: Option<f64>, low: Option<f64>) -> Self {
        self.fifty_two_week_high = high;
        self.fifty_two_week_low = low;
        self
    }

    pub fn with_indicators(mut self, indicators: IndicatorSet) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_rsi_history(mut self, history: Vec<IndicatorPoint>) -> Self {
        self.rsi_history = history;
        self
    }

    pub fn with_sma_history(
        mut self,
        sma50: Vec<IndicatorPoint>,
        sma200: Vec<IndicatorPoint>,
    ) -> Self {
        self.sma50_history = sma50;
        self.sma200_history = sma200;
        self
    }

    pub fn with_macd_history(mut self, history: Vec<MacdPoint>) -> Self {
        self.macd_history = history;
        self
    }
}
