//! Swing points, price clusters and the resulting support/resistance pair.

use serde::{Deserialize, Serialize};

/// A local extremum (high or low) confirmed over a symmetric bar window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    pub price: f64,
    pub timestamp: i64,
}

impl SwingPoint {
    pub fn new(price: f64, timestamp: i64) -> Self {
        Self { price, timestamp }
    }
}

/// Swing points merged into one candidate level via a running average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCluster {
    pub avg_price: f64,
    pub touches: u32,
}

impl PriceCluster {
    pub fn new(price: f64) -> Self {
        Self {
            avg_price: price,
            touches: 1,
        }
    }

    /// Folds another swing price into the running average.
    pub fn merge(&mut self, price: f64) {
        self.touches += 1;
        let touches = self.touches as f64;
        self.avg_price = (self.avg_price * (touches - 1.0) + price) / touches;
    }
}

/// Selected levels, each rounded to the configured step. `None` means no
/// qualifying cluster, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    pub support: Option<f64>,
    pub resistance: Option<f64>,
}

impl SupportResistanceLevels {
    pub fn none() -> Self {
        Self::default()
    }
}
