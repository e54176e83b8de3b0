use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("non-finite value in field `{0}`")]
    NonFinite(&'static str),

    #[error("non-positive price in field `{field}`: {value}")]
    NonPositivePrice { field: &'static str, value: f64 },

    #[error("inverted bar: low {low} is above high {high}")]
    InvertedBar { low: f64, high: f64 },

    #[error("timestamp {0} is outside the representable date range")]
    InvalidTimestamp(i64),
}
