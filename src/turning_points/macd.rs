//! MACD signal-line and zero-line crossings

use chrono::NaiveDate;

use crate::models::bars::{timestamp_to_date, MacdPoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacdCrossings {
    pub bullish: Option<NaiveDate>,
    pub bearish: Option<NaiveDate>,
    pub zero_cross_up: Option<NaiveDate>,
    pub zero_cross_down: Option<NaiveDate>,
}

/// Earliest instance of each of the four MACD events in the window.
pub fn detect_macd_crossings(history: &[MacdPoint]) -> MacdCrossings {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|point| point.timestamp);

    let mut crossings = MacdCrossings::default();
    for pair in sorted.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        let date = || timestamp_to_date(current.timestamp);

        if crossings.bullish.is_none()
            && previous.macd <= previous.signal
            && current.macd > current.signal
        {
            crossings.bullish = date();
        }
        if crossings.bearish.is_none()
            && previous.macd >= previous.signal
            && current.macd < current.signal
        {
            crossings.bearish = date();
        }
        if crossings.zero_cross_up.is_none() && previous.macd <= 0.0 && current.macd > 0.0 {
            crossings.zero_cross_up = date();
        }
        if crossings.zero_cross_down.is_none() && previous.macd >= 0.0 && current.macd < 0.0 {
            crossings.zero_cross_down = date();
        }
    }
    crossings
}
