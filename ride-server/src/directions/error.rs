//! Directions client error types.

use std::path::PathBuf;

/// Provider status for a well-formed request with no route.
pub const ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Errors from the directions provider.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// The request never got a response (timeout, DNS, refused connection)
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered, but not with usable routes.
    ///
    /// `status` is the provider's own status (`REQUEST_DENIED`,
    /// `ZERO_RESULTS`, ...), `HTTP <code>` for non-2xx responses, or
    /// `INVALID_RESPONSE` for a body that did not decode.
    #[error("directions provider returned {status}: {message}")]
    Provider { status: String, message: String },

    /// A canned response file could not be loaded
    #[error("failed to load mock directions from {path}: {message}")]
    Fixture { path: PathBuf, message: String },
}

impl DirectionsError {
    pub(crate) fn provider(status: impl Into<String>, message: impl Into<String>) -> Self {
        DirectionsError::Provider {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Whether the provider found no route at all.
    pub fn is_zero_results(&self) -> bool {
        matches!(self, DirectionsError::Provider { status, .. } if status == ZERO_RESULTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::provider("REQUEST_DENIED", "The provided API key is invalid.");
        assert_eq!(
            err.to_string(),
            "directions provider returned REQUEST_DENIED: The provided API key is invalid."
        );

        let err = DirectionsError::Fixture {
            path: PathBuf::from("data/mock_directions/missing.json"),
            message: "No such file or directory".into(),
        };
        assert!(err.to_string().contains("data/mock_directions/missing.json"));
    }

    #[test]
    fn zero_results_detection() {
        assert!(DirectionsError::provider(ZERO_RESULTS, "").is_zero_results());
        assert!(!DirectionsError::provider("REQUEST_DENIED", "").is_zero_results());
        assert!(!DirectionsError::provider("HTTP 500", "").is_zero_results());
    }
}
