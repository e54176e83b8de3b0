//! HTTP client for Polygon-style REST endpoints and the delayed-quote endpoint

use backon::{ExponentialBuilder, Retryable};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::ProviderConfig;
use crate::services::error::MarketDataError;

pub struct PolygonRestClient {
    http: reqwest::Client,
    polygon_base: Url,
    polygon_api_key: String,
    benzinga_base: Url,
    benzinga_api_key: String,
    max_retries: usize,
}

impl PolygonRestClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, MarketDataError> {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(
        config: &ProviderConfig,
        http: reqwest::Client,
    ) -> Result<Self, MarketDataError> {
        Ok(Self {
            http,
            polygon_base: Url::parse(&config.polygon_base_url)?,
            polygon_api_key: config.polygon_api_key.clone(),
            benzinga_base: Url::parse(&config.benzinga_base_url)?,
            benzinga_api_key: config.benzinga_api_key.clone(),
            max_retries: config.max_retries,
        })
    }

    /// Polygon URL with `segments` appended to the base path and the API key
    /// added to `query`.
    pub fn polygon_url(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, MarketDataError> {
        let mut url = build_url(&self.polygon_base, segments)?;
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("apiKey", &self.polygon_api_key);
        Ok(url)
    }

    pub fn quote_url(&self, symbol: &str) -> Result<Url, MarketDataError> {
        let mut url = build_url(&self.benzinga_base, &["api", "v2", "quoteDelayed"])?;
        url.query_pairs_mut()
            .append_pair("token", &self.benzinga_api_key)
            .append_pair("symbols", symbol);
        Ok(url)
    }

    /// GET returning JSON, retrying transient failures with exponential backoff.
    pub async fn get_json(&self, url: Url) -> Result<Value, MarketDataError> {
        let endpoint = url.path().to_string();
        let fetch = || async {
            let response = self.http.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(MarketDataError::Status {
                    status: status.as_u16(),
                    endpoint: endpoint.clone(),
                });
            }
            let body = response.json::<Value>().await?;
            Ok::<Value, MarketDataError>(body)
        };

        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_times(self.max_retries);

        let body = fetch
            .retry(backoff)
            .when(|e: &MarketDataError| e.is_transient())
            .notify(|e: &MarketDataError, delay: Duration| {
                warn!(
                    endpoint = %endpoint,
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying market data request"
                );
            })
            .await?;

        debug!(endpoint = %endpoint, "Market data request succeeded");
        Ok(body)
    }
}

fn build_url(base: &Url, segments: &[&str]) -> Result<Url, MarketDataError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| MarketDataError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
