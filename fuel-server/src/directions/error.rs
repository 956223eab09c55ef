//! Directions client error types.

/// Errors from the Directions HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
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

    /// The API found no usable route between the endpoints
    #[error("no route found ({status})")]
    NoRoute {
        /// Status reported by the API body, e.g. `ZERO_RESULTS`.
        status: String,
        /// Human-readable cause, when the API supplied one.
        message: Option<String>,
    },
}

impl DirectionsError {
    /// Whether this is the "no route between these places" outcome,
    /// as opposed to a transport or protocol failure.
    pub fn is_no_route(&self) -> bool {
        matches!(self, DirectionsError::NoRoute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::NoRoute {
            status: "ZERO_RESULTS".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "no route found (ZERO_RESULTS)");
        assert!(err.is_no_route());

        let err = DirectionsError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");
        assert!(!err.is_no_route());
    }
}
