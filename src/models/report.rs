//! Records handed to the narrative generator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::indicators::{MacdIndicator, MovingAverageKind, RsiIndicator};
use crate::models::turning_points::TurningPoints;

/// Current quote as resolved at the ingestion boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Above,
    Below,
}

impl fmt::Display for PriceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceDirection::Above => write!(f, "above"),
            PriceDirection::Below => write!(f, "below"),
        }
    }
}

/// Where the current price sits relative to one moving average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingAverageRelation {
    pub kind: MovingAverageKind,
    pub period: u32,
    pub value: f64,
    /// Absolute distance in percent.
    pub percent: f64,
    pub direction: PriceDirection,
}

/// Label for a moving-average pair comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "label", content = "date", rename_all = "snake_case")]
pub enum CrossoverSignal {
    Bullish,
    Bearish,
    GoldenCross(NaiveDate),
    DeathCross(NaiveDate),
    BullishLongTermTrend,
    BearishLongTermTrend,
}

impl fmt::Display for CrossoverSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverSignal::Bullish => write!(f, "bullish"),
            CrossoverSignal::Bearish => write!(f, "bearish"),
            CrossoverSignal::GoldenCross(date) => write!(f, "golden cross ({})", date),
            CrossoverSignal::DeathCross(date) => write!(f, "death cross ({})", date),
            CrossoverSignal::BullishLongTermTrend => write!(f, "bullish long-term trend"),
            CrossoverSignal::BearishLongTermTrend => write!(f, "bearish long-term trend"),
        }
    }
}

/// Everything the core derives for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalReport {
    pub symbol: String,
    pub current_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twelve_month_return: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub moving_averages: Vec<MovingAverageRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term_crossover: Option<CrossoverSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term_crossover: Option<CrossoverSignal>,
    pub turning_points: TurningPoints,
    pub generated_at: DateTime<Utc>,
}
