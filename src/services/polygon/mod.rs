//! Polygon aggregates/indicators plus delayed quotes

pub mod client;
pub mod provider;
pub mod responses;

pub use client::PolygonRestClient;
pub use provider::PolygonMarketDataProvider;
