//! Runtime configuration.
//!
//! Everything is passed explicitly into the analyzer and provider; there is no
//! process-wide state.

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_POLYGON_BASE_URL: &str = "https://api.polygon.io";
pub const DEFAULT_BENZINGA_BASE_URL: &str = "https://api.benzinga.com";

/// Returns the deployment environment name (`ENVIRONMENT`, default `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Numeric knobs for every core computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    /// Minimum bars before support/resistance is attempted.
    pub min_levels_bars: usize,
    /// Trailing windows pooled for swing detection, in pooling order.
    pub level_windows: Vec<usize>,
    pub level_swing_radius: usize,
    pub cluster_tolerance: f64,
    /// Fractional band around the current price a level must fall inside.
    pub level_band: f64,
    pub recent_swing_days: i64,
    pub level_rounding_step: f64,
    pub narrative_swing_bars: usize,
    pub narrative_swing_radius: usize,
    pub extreme_tolerance: f64,
    pub return_lookback_months: u32,
    pub sma_periods: Vec<u32>,
    pub ema_periods: Vec<u32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            min_levels_bars: 30,
            level_windows: vec![90, 180, 252],
            level_swing_radius: 5,
            cluster_tolerance: 1.0,
            level_band: 0.20,
            recent_swing_days: 60,
            level_rounding_step: 0.5,
            narrative_swing_bars: 60,
            narrative_swing_radius: 2,
            extreme_tolerance: 0.01,
            return_lookback_months: 12,
            sma_periods: vec![20, 50, 100, 200],
            ema_periods: vec![20, 50, 100, 200],
        }
    }
}

/// Market data endpoints and credentials.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub polygon_base_url: String,
    pub polygon_api_key: String,
    pub benzinga_base_url: String,
    pub benzinga_api_key: String,
    pub max_retries: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            polygon_base_url: DEFAULT_POLYGON_BASE_URL.to_string(),
            polygon_api_key: String::new(),
            benzinga_base_url: DEFAULT_BENZINGA_BASE_URL.to_string(),
            benzinga_api_key: String::new(),
            max_retries: 3,
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            polygon_base_url: env::var("POLYGON_BASE_URL").unwrap_or(defaults.polygon_base_url),
            polygon_api_key: env::var("POLYGON_API_KEY").unwrap_or_default(),
            benzinga_base_url: env::var("BENZINGA_BASE_URL")
                .unwrap_or(defaults.benzinga_base_url),
            benzinga_api_key: env::var("BENZINGA_API_KEY").unwrap_or_default(),
            max_retries: env::var("PROVIDER_MAX_RETRIES")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.max_retries),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub environment: String,
    pub analysis: AnalysisConfig,
    pub provider: ProviderConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            environment: get_environment(),
            analysis: AnalysisConfig::default(),
            provider: ProviderConfig::from_env(),
        }
    }
}
