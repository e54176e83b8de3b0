//! Market data ingestion: the provider interface and its REST adapter.

pub mod aliases;
pub mod error;
pub mod market_data;
pub mod polygon;

pub use error::MarketDataError;
pub use market_data::MarketDataProvider;
pub use polygon::PolygonMarketDataProvider;
