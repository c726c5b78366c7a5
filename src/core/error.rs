use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MxError {
    /// The provider answered 429 and kept doing so for the whole retry budget.
    #[error("rate limited by upstream: {url}")]
    RateLimited {
        /// The URL that was rate limited.
        url: String,
    },

    /// The provider could not be reached: connection failure, timeout, or a
    /// broken response body. Distinct from an HTTP-status error.
    #[error("upstream unavailable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The provider rejected the request with a non-429 error status
    /// (bad token, malformed query, server fault).
    #[error("upstream rejected request: status {status} at {url}")]
    Rejected {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not the JSON envelope we expect.
    #[error("invalid JSON from upstream: {0}")]
    Json(#[from] serde_json::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// No API token was configured.
    #[error("auth error: {0}")]
    Auth(String),

    /// An internal request could not be constructed as expected.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),
}

impl MxError {
    /// Whether the condition is worth retrying later. Rate limiting and
    /// network failures are transient; a rejection or a parse failure will
    /// repeat until the request (or the provider) changes.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Unavailable(_))
    }
}
