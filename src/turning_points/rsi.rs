//! RSI overbought/oversold threshold crossings

use chrono::NaiveDate;

use crate::models::bars::{timestamp_to_date, IndicatorPoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsiCrossings {
    pub overbought: Option<NaiveDate>,
    pub oversold: Option<NaiveDate>,
}

/// Most recent crossing into each zone.
///
/// Scans newest first: the first pair moving from below `overbought` to at or
/// above it sets the overbought date; the first pair moving from above
/// `oversold` to at or below it sets the oversold date. The date is the newer
/// sample's.
pub fn detect_rsi_crossings(
    history: &[IndicatorPoint],
    overbought: f64,
    oversold: f64,
) -> RsiCrossings {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|point| std::cmp::Reverse(point.timestamp));

    let mut crossings = RsiCrossings::default();
    for pair in sorted.windows(2) {
        let (current, previous) = (&pair[0], &pair[1]);

        if crossings.overbought.is_none()
            && previous.value < overbought
            && current.value >= overbought
        {
            crossings.overbought = timestamp_to_date(current.timestamp);
        }
        if crossings.oversold.is_none() && previous.value > oversold && current.value <= oversold {
            crossings.oversold = timestamp_to_date(current.timestamp);
        }
        if crossings.overbought.is_some() && crossings.oversold.is_some() {
            break;
        }
    }
    crossings
}
