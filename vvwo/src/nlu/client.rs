//! NLU query HTTP client.
//!
//! Sends an utterance to the query-parsing endpoint and converts the
//! answer to a `QueryResult`. One request per call: no retries, no cache.

use std::future::Future;

use tracing::debug;

use crate::domain::QueryResult;

use super::convert::convert_query_response;
use super::error::NluError;
use super::types::QueryResponse;

/// Default base URL for the NLU service.
const DEFAULT_BASE_URL: &str = "https://vvwo.kilian.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Anything that can turn an utterance into a `QueryResult`.
///
/// This abstraction lets the session be tested without a live service.
pub trait QueryParser {
    /// Parse one utterance.
    fn parse(&self, utterance: &str)
    -> impl Future<Output = Result<QueryResult, NluError>> + Send;
}

/// Configuration for the NLU client.
#[derive(Debug, Clone)]
pub struct NluConfig {
    /// Base URL of the service; `/query` is appended.
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NluConfig {
    /// Create a config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NluConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the NLU query endpoint.
#[derive(Debug, Clone)]
pub struct NluClient {
    http: reqwest::Client,
    query_url: String,
}

impl NluClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NluConfig) -> Result<Self, NluError> {
        let base = config.base_url.trim_end_matches('/');
        if base.is_empty() {
            return Err(NluError::InvalidConfig("base URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            query_url: format!("{base}/query"),
        })
    }

    /// The full URL requests are sent to.
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Send one utterance to the service.
    ///
    /// Empty utterances are sent as-is; the service decides what they mean.
    pub async fn parse_query(&self, utterance: &str) -> Result<QueryResult, NluError> {
        debug!(url = %self.query_url, utterance, "sending utterance to NLU service");

        // Form-encoded: `query=<utterance>`
        let response = self
            .http
            .post(&self.query_url)
            .form(&[("query", utterance)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NluError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: QueryResponse = serde_json::from_str(&body).map_err(|e| NluError::Decode {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_query_response(parsed))
    }
}

impl QueryParser for NluClient {
    async fn parse(&self, utterance: &str) -> Result<QueryResult, NluError> {
        self.parse_query(utterance).await
    }
}
