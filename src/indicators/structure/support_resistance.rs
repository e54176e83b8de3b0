//! Support and Resistance levels detection
//!
//! Swing points from several overlapping trailing windows are pooled, merged
//! into price clusters, and the strongest cluster on each side of the current
//! price becomes the level.

use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::indicators::structure::swing::{find_swing_highs, find_swing_lows};
use crate::models::bars::{sorted_ascending, DailyBar};
use crate::models::levels::{PriceCluster, SupportResistanceLevels, SwingPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelSide {
    Support,
    Resistance,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    price: f64,
    touches: u32,
    is_recent: bool,
}

/// Streaming cluster merge.
///
/// Each swing joins the first existing cluster whose running average lies
/// within `tolerance`, otherwise it opens a new one. The result depends on
/// input order and is deterministic for a given order.
pub fn cluster_swings(swings: &[SwingPoint], tolerance: f64) -> Vec<PriceCluster> {
    let mut clusters: Vec<PriceCluster> = Vec::new();

    for swing in swings {
        match clusters
            .iter_mut()
            .find(|cluster| (cluster.avg_price - swing.price).abs() <= tolerance)
        {
            Some(cluster) => cluster.merge(swing.price),
            None => clusters.push(PriceCluster::new(swing.price)),
        }
    }

    clusters
}

/// Rounds to the nearest multiple of `step`.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Calculate support and resistance levels as of `now`.
///
/// Swings are pooled window by window in `config.level_windows` order, so a
/// swing inside several windows is counted once per window.
pub fn calculate_support_resistance(
    bars: &[DailyBar],
    current_price: f64,
    config: &AnalysisConfig,
    now: DateTime<Utc>,
) -> SupportResistanceLevels {
    if bars.len() < config.min_levels_bars {
        debug!(
            count = bars.len(),
            min = config.min_levels_bars,
            "Not enough bars for support/resistance"
        );
        return SupportResistanceLevels::none();
    }
    if !current_price.is_finite() || current_price <= 0.0 {
        debug!(current_price, "Invalid current price for support/resistance");
        return SupportResistanceLevels::none();
    }

    let sorted = sorted_ascending(bars);

    let mut swing_highs = Vec::new();
    let mut swing_lows = Vec::new();
    for &window in &config.level_windows {
        let window_bars = &sorted[sorted.len().saturating_sub(window)..];
        swing_highs.extend(find_swing_highs(window_bars, config.level_swing_radius));
        swing_lows.extend(find_swing_lows(window_bars, config.level_swing_radius));
    }

    let resistance_clusters = cluster_swings(&swing_highs, config.cluster_tolerance);
    let support_clusters = cluster_swings(&swing_lows, config.cluster_tolerance);

    let recent_cutoff = (now - Duration::days(config.recent_swing_days)).timestamp_millis();

    let resistance = select_level(
        LevelSide::Resistance,
        &resistance_clusters,
        &swing_highs,
        current_price,
        recent_cutoff,
        config,
    );
    let support = select_level(
        LevelSide::Support,
        &support_clusters,
        &swing_lows,
        current_price,
        recent_cutoff,
        config,
    );

    debug!(
        swing_highs = swing_highs.len(),
        swing_lows = swing_lows.len(),
        ?support,
        ?resistance,
        "Support/resistance computed"
    );

    SupportResistanceLevels {
        support,
        resistance,
    }
}

/// Calculate support/resistance with default settings against the wall clock
pub fn calculate_support_resistance_default(
    bars: &[DailyBar],
    current_price: f64,
) -> SupportResistanceLevels {
    calculate_support_resistance(bars, current_price, &AnalysisConfig::default(), Utc::now())
}

fn select_level(
    side: LevelSide,
    clusters: &[PriceCluster],
    swings: &[SwingPoint],
    current_price: f64,
    recent_cutoff: i64,
    config: &AnalysisConfig,
) -> Option<f64> {
    let in_band = |price: f64| match side {
        LevelSide::Resistance => {
            price > current_price && price < current_price * (1.0 + config.level_band)
        }
        LevelSide::Support => {
            price < current_price && price > current_price * (1.0 - config.level_band)
        }
    };

    let mut candidates: Vec<Candidate> = clusters
        .iter()
        .filter(|cluster| in_band(cluster.avg_price))
        .map(|cluster| Candidate {
            price: cluster.avg_price,
            touches: cluster.touches,
            is_recent: swings.iter().any(|swing| {
                (swing.price - cluster.avg_price).abs() <= config.cluster_tolerance
                    && swing.timestamp >= recent_cutoff
            }),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.is_recent
            .cmp(&a.is_recent)
            .then(b.touches.cmp(&a.touches))
            .then_with(|| {
                let by_price = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
                match side {
                    LevelSide::Resistance => by_price,
                    LevelSide::Support => by_price.reverse(),
                }
            })
    });

    // Rounding can pull a level onto or across the current price; such a
    // level is no longer on its side and the next candidate is used.
    candidates
        .iter()
        .map(|candidate| round_to_step(candidate.price, config.level_rounding_step))
        .find(|&level| match side {
            LevelSide::Resistance => level > current_price,
            LevelSide::Support => level < current_price,
        })
}
