use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sparse record of dated technical events.
///
/// A field is populated only when its condition was observed in the supplied
/// history; nothing here is ever defaulted or interpolated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurningPoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_overbought_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_oversold_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golden_cross_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_cross_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_bullish_cross_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_bearish_cross_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_zero_cross_up_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_zero_cross_down_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing_high_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing_low_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_high_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifty_two_week_low_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance_break_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_break_date: Option<NaiveDate>,
}

impl TurningPoints {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of populated event dates.
    pub fn event_count(&self) -> usize {
        [
            self.rsi_overbought_date,
            self.rsi_oversold_date,
            self.golden_cross_date,
            self.death_cross_date,
            self.macd_bullish_cross_date,
            self.macd_bearish_cross_date,
            self.macd_zero_cross_up_date,
            self.macd_zero_cross_down_date,
            self.swing_high_date,
            self.swing_low_date,
            self.fifty_two_week_high_date,
            self.fifty_two_week_low_date,
            self.resistance_break_date,
            self.support_break_date,
        ]
        .iter()
        .filter(|date| date.is_some())
        .count()
    }
}
