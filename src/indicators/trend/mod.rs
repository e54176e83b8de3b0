//! Trend indicators: moving-average relationships and crossovers

pub mod moving_average;

pub use moving_average::*;
