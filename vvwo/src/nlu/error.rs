//! NLU client error types.

/// Errors from the NLU HTTP client.
///
/// `Http` and `Api` are transport-level failures; `Decode` means the
/// service answered with something that is not a query response.
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected schema
    #[error("JSON decode error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// The client could not be configured
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl NluError {
    /// Returns true for transport-level failures.
    pub fn is_network(&self) -> bool {
        matches!(self, NluError::Http(_) | NluError::Api { .. })
    }

    /// Returns true if the response could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, NluError::Decode { .. })
    }
}
