//! ORS client error types.

use crate::domain::InvalidCoordinate;

/// Errors from the OpenRouteService HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum OrsError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the API
    #[error("rate limited by OpenRouteService")]
    RateLimited,

    /// Invalid or missing API key
    #[error("unauthorized: check ORS_API_KEY")]
    Unauthorized,

    /// Provider returned a coordinate outside valid ranges
    #[error("provider returned an invalid coordinate: {0}")]
    BadCoordinate(#[from] InvalidCoordinate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OrsError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = OrsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));

        let err = OrsError::Unauthorized;
        assert!(err.to_string().contains("ORS_API_KEY"));
    }
}
