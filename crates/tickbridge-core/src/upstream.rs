//! Yahoo Finance endpoint client.
//!
//! One bounded JSON-over-HTTP GET per call, classified into the
//! [`UpstreamError`] taxonomy. Retry/fallback is the resolver's
//! responsibility and operates over candidate symbols, never over transient
//! errors at a single candidate.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::http_client::{HttpClient, HttpRequest};
use crate::{Symbol, UpstreamError};

/// Provider name reported in resolved results.
pub const PROVIDER_NAME: &str = "yahoo";

const SEARCH_URL: &str = "https://query1.finance.yahoo.com/v1/finance/search";
const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Per-call upstream deadline.
const UPSTREAM_TIMEOUT_MS: u64 = 20_000;

/// Search result cap; news results are never requested.
const SEARCH_QUOTES_COUNT: u32 = 12;

const USER_AGENT: &str = concat!("tickbridge/", env!("CARGO_PKG_VERSION"));

/// Thin JSON client over the Yahoo search and chart endpoints.
#[derive(Clone)]
pub struct YahooClient {
    http: Arc<dyn HttpClient>,
}

impl YahooClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    pub(crate) fn search_url(query: &str) -> String {
        format!(
            "{}?q={}&quotesCount={}&newsCount=0",
            SEARCH_URL,
            urlencoding::encode(query),
            SEARCH_QUOTES_COUNT
        )
    }

    pub(crate) fn chart_url(symbol: &Symbol, from_ts: i64, to_ts: i64) -> String {
        format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=history",
            CHART_URL,
            urlencoding::encode(symbol.as_str()),
            from_ts,
            to_ts
        )
    }

    /// Issue a single GET and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_header("user-agent", USER_AGENT)
            .with_timeout_ms(UPSTREAM_TIMEOUT_MS);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| UpstreamError::Network(error.message().to_owned()))?;

        if !response.is_success() {
            return Err(UpstreamError::Http {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| UpstreamError::Parse(error.to_string()))
    }
}
