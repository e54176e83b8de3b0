use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("base URL cannot carry a path: {0}")]
    InvalidBaseUrl(String),

    #[error("missing field `{0}` in response")]
    MissingField(&'static str),

    #[error("no data returned for {0}")]
    Empty(String),
}

impl MarketDataError {
    /// Transport failures, throttling and server errors are worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            MarketDataError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
