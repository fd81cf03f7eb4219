//! Price API error types.

/// Errors from the price API client.
///
/// Callers do not branch on the variant: every failure renders a
/// human-readable message, is shown to the user, and is recovered from
/// by issuing a fresh fetch.
#[derive(Debug, thiserror::Error)]
pub enum TankerError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose payload reported failure
    #[error("service error: {message}")]
    Service { message: String },

    /// Failed to parse the response body
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
