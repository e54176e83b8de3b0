//! Golden cross / death cross between the 50- and 200-day SMA series

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use crate::models::bars::{timestamp_to_date, IndicatorPoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovingAverageCrosses {
    /// Start of the currently active bullish regime; only set while the
    /// latest sample has SMA-50 above SMA-200.
    pub golden_cross: Option<NaiveDate>,
    /// Most recent death cross, whenever one exists.
    pub death_cross: Option<NaiveDate>,
}

/// Detects crossings over the timestamps both series share.
///
/// Golden: SMA-50 moves from `<=` to `>` SMA-200. Death: from `>=` to `<`.
/// When currently golden, the reported golden cross is the oldest one after
/// the most recent death cross, or the first golden cross if no death cross
/// exists.
pub fn detect_moving_average_crosses(
    sma50: &[IndicatorPoint],
    sma200: &[IndicatorPoint],
) -> MovingAverageCrosses {
    let slow: HashMap<i64, f64> = sma200
        .iter()
        .map(|point| (point.timestamp, point.value))
        .collect();

    let aligned: Vec<(i64, f64, f64)> = sma50
        .iter()
        .filter_map(|point| {
            slow.get(&point.timestamp)
                .map(|&slow_value| (point.timestamp, (point.value, slow_value)))
        })
        .collect::<BTreeMap<i64, (f64, f64)>>()
        .into_iter()
        .map(|(timestamp, (fast, slow))| (timestamp, fast, slow))
        .collect();

    let Some(&(_, latest_fast, latest_slow)) = aligned.last() else {
        debug!(
            sma50 = sma50.len(),
            sma200 = sma200.len(),
            "No overlapping SMA samples for crossover detection"
        );
        return MovingAverageCrosses::default();
    };

    let mut golden_crosses = Vec::new();
    let mut death_crosses = Vec::new();
    for pair in aligned.windows(2) {
        let (_, prev_fast, prev_slow) = pair[0];
        let (timestamp, fast, slow) = pair[1];

        if prev_fast <= prev_slow && fast > slow {
            golden_crosses.push(timestamp);
        } else if prev_fast >= prev_slow && fast < slow {
            death_crosses.push(timestamp);
        }
    }

    let last_death = death_crosses.last().copied();
    let golden_cross = if latest_fast > latest_slow {
        match last_death {
            Some(death) => golden_crosses.iter().copied().find(|&golden| golden > death),
            None => golden_crosses.first().copied(),
        }
    } else {
        None
    };

    MovingAverageCrosses {
        golden_cross: golden_cross.and_then(timestamp_to_date),
        death_cross: last_death.and_then(timestamp_to_date),
    }
}
