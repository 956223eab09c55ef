//! Places client error types.

/// Errors from the Places HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The HTTP layer returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The API body reported a failure status.
    ///
    /// `ZERO_RESULTS` never takes this path; it is a successful empty
    /// search, not a failure.
    #[error("places search failed ({status})")]
    Status {
        status: String,
        message: Option<String>,
    },
}
