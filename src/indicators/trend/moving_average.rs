//! Price vs. moving average relationships and MA pair classification

use crate::models::indicators::{IndicatorSet, MovingAverageKind};
use crate::models::report::{CrossoverSignal, MovingAverageRelation, PriceDirection};
use crate::models::turning_points::TurningPoints;

/// Relationship of `current_price` to a single moving average.
///
/// pct = (P - MA) / MA * 100, reported as magnitude plus direction
/// ("above" when pct >= 0). Absent, non-finite or zero averages yield `None`.
pub fn calculate_ma_relationship(
    kind: MovingAverageKind,
    period: u32,
    current_price: f64,
    moving_average: Option<f64>,
) -> Option<MovingAverageRelation> {
    let value = moving_average?;
    if !value.is_finite() || value == 0.0 || !current_price.is_finite() {
        return None;
    }

    let pct = (current_price - value) / value * 100.0;
    if !pct.is_finite() {
        return None;
    }

    Some(MovingAverageRelation {
        kind,
        period,
        value,
        percent: pct.abs(),
        direction: if pct >= 0.0 {
            PriceDirection::Above
        } else {
            PriceDirection::Below
        },
    })
}

/// Relationships for every configured SMA then EMA period that has a value.
pub fn calculate_ma_relationships(
    current_price: f64,
    indicators: &IndicatorSet,
    sma_periods: &[u32],
    ema_periods: &[u32],
) -> Vec<MovingAverageRelation> {
    let smas = sma_periods.iter().map(|&p| (MovingAverageKind::Sma, p));
    let emas = ema_periods.iter().map(|&p| (MovingAverageKind::Ema, p));

    smas.chain(emas)
        .filter_map(|(kind, period)| {
            calculate_ma_relationship(
                kind,
                period,
                current_price,
                indicators.moving_average(kind, period),
            )
        })
        .collect()
}

/// 20 vs 50 comparison: bullish when the faster average is on top.
pub fn classify_short_term_crossover(
    fast: Option<f64>,
    slow: Option<f64>,
) -> Option<CrossoverSignal> {
    let (fast, slow) = finite_pair(fast, slow)?;
    if fast > slow {
        Some(CrossoverSignal::Bullish)
    } else {
        Some(CrossoverSignal::Bearish)
    }
}

/// 50 vs 200 comparison.
///
/// Only names a golden/death cross when the matching dated crossing exists in
/// `turning_points`; otherwise falls back to the neutral long-term trend label.
/// Equal averages carry no direction and yield `None`.
pub fn classify_long_term_crossover(
    sma50: Option<f64>,
    sma200: Option<f64>,
    turning_points: &TurningPoints,
) -> Option<CrossoverSignal> {
    let (sma50, sma200) = finite_pair(sma50, sma200)?;

    if sma50 > sma200 {
        Some(match turning_points.golden_cross_date {
            Some(date) => CrossoverSignal::GoldenCross(date),
            None => CrossoverSignal::BullishLongTermTrend,
        })
    } else if sma50 < sma200 {
        Some(match turning_points.death_cross_date {
            Some(date) => CrossoverSignal::DeathCross(date),
            None => CrossoverSignal::BearishLongTermTrend,
        })
    } else {
        None
    }
}

fn finite_pair(a: Option<f64>, b: Option<f64>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() => Some((a, b)),
        _ => None,
    }
}
