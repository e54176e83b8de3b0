use serde_json::json;
use wgo_technicals::config::ProviderConfig;
use wgo_technicals::services::polygon::PolygonRestClient;
use wgo_technicals::services::PolygonMarketDataProvider;
use wiremock::matchers::{method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SYMBOL: &str = "ACME";

/// Mocked upstream plus a provider pointed at it.
pub struct TestUpstream {
    pub server: MockServer,
    pub provider: PolygonMarketDataProvider,
}

impl TestUpstream {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let provider = PolygonMarketDataProvider::with_client(
            PolygonRestClient::with_client(&provider_config(&server, 2), reqwest::Client::new())
                .expect("client"),
        );
        Self { server, provider }
    }
}

pub fn provider_config(server: &MockServer, max_retries: usize) -> ProviderConfig {
    ProviderConfig {
        polygon_base_url: server.uri(),
        polygon_api_key: "test-key".to_string(),
        benzinga_base_url: server.uri(),
        benzinga_api_key: "test-token".to_string(),
        max_retries,
    }
}

pub async fn mock_quote(server: &MockServer) {
    let response = json!({
        "ACME": {
            "symbol": SYMBOL,
            "lastTradePrice": 101.25,
            "fiftyTwoWeekHigh": 120.0,
            "fiftyTwoWeekLow": "80.5"
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/quoteDelayed"))
        .and(query_param("symbols", SYMBOL))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_aggregates(server: &MockServer) {
    let response = json!({
        "ticker": SYMBOL,
        "status": "OK",
        "results": [
            { "o": 99.0, "h": 101.0, "l": 98.0, "c": 100.0, "v": 1000, "t": 1_704_153_600_000_i64 },
            { "o": 100.0, "h": 103.0, "l": 99.5, "c": 102.0, "v": 1200, "t": 1_704_240_000_000_i64 }
        ]
    });

    Mock::given(method("GET"))
        .and(path_regex(r"^/v2/aggs/ticker/ACME/range/1/day/[0-9-]+/[0-9-]+$"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}

pub async fn mock_indicator(server: &MockServer, indicator: &str, values: serde_json::Value) {
    let response = json!({ "results": { "values": values }, "status": "OK" });

    Mock::given(method("GET"))
        .and(path(format!("/v1/indicators/{}/{}", indicator, SYMBOL)))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(server)
        .await;
}
