//! Shared data models spanning the engine layers.

pub mod bars;
pub mod indicators;
pub mod levels;
pub mod report;
pub mod turning_points;

pub use bars::{timestamp_to_date, DailyBar, IndicatorPoint, MacdPoint};
pub use indicators::{
    EmaIndicator, IndicatorSet, MacdIndicator, MovingAverageKind, RsiIndicator, SmaIndicator,
};
pub use levels::{PriceCluster, SupportResistanceLevels, SwingPoint};
pub use report::{CrossoverSignal, MovingAverageRelation, PriceDirection, Quote, TechnicalReport};
pub use turning_points::TurningPoints;
