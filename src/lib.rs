//! Technical-analysis core for "What's Going On" stock articles.
//!
//! Indicator relationships, support/resistance levels and dated turning
//! points are computed from a year of daily bars plus externally supplied
//! indicator series. Every computation degrades to an absent value on
//! insufficient data instead of failing.

pub mod analysis;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod turning_points;
