//! Swing high/low detection over a symmetric bar window

use crate::models::bars::DailyBar;
use crate::models::levels::SwingPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingKind {
    High,
    Low,
}

/// Bars whose `high` strictly exceeds every other `high` within `radius`
/// positions on either side. Bars closer than `radius` to either end of the
/// slice lack full context and are never candidates. Input order is taken as
/// chronological.
pub fn find_swing_highs(bars: &[DailyBar], radius: usize) -> Vec<SwingPoint> {
    find_swings(bars, radius, SwingKind::High)
}

/// Mirror of [`find_swing_highs`] on `low`.
pub fn find_swing_lows(bars: &[DailyBar], radius: usize) -> Vec<SwingPoint> {
    find_swings(bars, radius, SwingKind::Low)
}

pub fn find_swings(bars: &[DailyBar], radius: usize, kind: SwingKind) -> Vec<SwingPoint> {
    if bars.len() < radius * 2 + 1 {
        return Vec::new();
    }

    let price = |bar: &DailyBar| match kind {
        SwingKind::High => bar.high,
        SwingKind::Low => bar.low,
    };

    (radius..bars.len() - radius)
        .filter(|&i| {
            let candidate = price(&bars[i]);
            (i - radius..=i + radius)
                .filter(|&j| j != i)
                .all(|j| match kind {
                    SwingKind::High => candidate > price(&bars[j]),
                    SwingKind::Low => candidate < price(&bars[j]),
                })
        })
        .map(|i| SwingPoint::new(price(&bars[i]), bars[i].timestamp))
        .collect()
}
