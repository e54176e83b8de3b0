//! Closes breaking through support or resistance

use chrono::NaiveDate;

use crate::models::bars::{sorted_descending, DailyBar};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelBreaks {
    pub resistance: Option<NaiveDate>,
    pub support: Option<NaiveDate>,
}

/// Most recent close crossing above `resistance` (from at/below) and most
/// recent close crossing below `support` (from at/above).
pub fn detect_level_breaks(
    bars: &[DailyBar],
    support: Option<f64>,
    resistance: Option<f64>,
) -> LevelBreaks {
    let sorted = sorted_descending(bars);
    let mut breaks = LevelBreaks::default();

    for pair in sorted.windows(2) {
        let (current, previous) = (&pair[0], &pair[1]);

        if let (None, Some(level)) = (breaks.resistance, resistance) {
            if previous.close <= level && current.close > level {
                breaks.resistance = current.date();
            }
        }
        if let (None, Some(level)) = (breaks.support, support) {
            if previous.close >= level && current.close < level {
                breaks.support = current.date();
            }
        }
        if breaks.resistance.is_some() == resistance.is_some()
            && breaks.support.is_some() == support.is_some()
        {
            break;
        }
    }
    breaks
}
