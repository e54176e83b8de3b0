//! Price performance over calendar periods

pub mod period_return;

pub use period_return::*;
