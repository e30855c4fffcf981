//! Numbers API client
//!
//! Fetches a plain-text trivia string ("fun fact") for an integer from the
//! public Numbers API. A single GET per request, no retry, no caching;
//! failures are mapped to fixed fallback strings so the classification
//! endpoint never fails because the trivia service is unavailable.

use std::time::Duration;
use thiserror::Error;

const NUMBERS_API_BASE_URL: &str = "http://numbersapi.com";
const USER_AGENT: &str = "numclass/0.1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fallback when the Numbers API answers with a non-200 status
pub const NO_FACT_FALLBACK: &str = "No fun fact available.";
/// Fallback when the request does not complete at all
pub const FETCH_ERROR_FALLBACK: &str = "Error fetching fun fact.";

/// Numbers API client errors
#[derive(Debug, Error)]
pub enum FactError {
    /// Network communication error (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Numbers API returned an error response
    #[error("Numbers API returned status {0}")]
    ApiError(u16),
}

/// Client for the Numbers API trivia endpoint
#[derive(Debug, Clone)]
pub struct FunFactClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl FunFactClient {
    /// Create a client pointed at the public Numbers API
    pub fn new() -> Result<Self, FactError> {
        Self::with_base_url(NUMBERS_API_BASE_URL)
    }

    /// Create a client against an alternate base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FactError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| FactError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the trivia string for `number`
    ///
    /// 200 → response body verbatim; any other status → `FactError::ApiError`;
    /// transport failure → `FactError::Network`.
    pub async fn fetch(&self, number: i64) -> Result<String, FactError> {
        let url = format!("{}/{}", self.base_url, number);

        tracing::debug!(number, url = %url, "Querying Numbers API");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FactError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::ApiError(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FactError::Network(e.to_string()))
    }

    /// Fetch the trivia string for `number`, swallowing failures
    ///
    /// Non-200 responses and transport errors are replaced with fixed
    /// fallback text rather than propagated.
    pub async fn fact_or_fallback(&self, number: i64) -> String {
        match self.fetch(number).await {
            Ok(fact) => fact,
            Err(FactError::ApiError(status)) => {
                tracing::warn!(number, status, "Numbers API returned error status");
                NO_FACT_FALLBACK.to_string()
            }
            Err(FactError::Network(msg)) => {
                tracing::warn!(number, error = %msg, "Failed to reach Numbers API");
                FETCH_ERROR_FALLBACK.to_string()
            }
        }
    }
}
