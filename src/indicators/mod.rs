pub mod error;
pub mod validation;

pub mod performance;
pub mod structure;
pub mod trend;

pub use error::IndicatorError;
pub use validation::*;
