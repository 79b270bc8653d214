//! Link resolution error types.

/// Errors from resolving a shared map link.
///
/// Every variant means the link could not be turned into an
/// origin/destination pair.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Building the HTTP client failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The input is not a URL at all
    #[error("not a valid URL: {message}")]
    InvalidUrl { message: String },

    /// A shortened link could not be followed
    #[error("failed to expand short link {url}: {source}")]
    Expansion {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No known link shape yielded both an origin and a destination
    #[error("no origin and destination found in {url}")]
    NoRouteEnds { url: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LinkError::InvalidUrl {
            message: "relative URL without a base".into(),
        };
        assert_eq!(err.to_string(), "not a valid URL: relative URL without a base");

        let err = LinkError::NoRouteEnds {
            url: "https://www.google.com/maps/@40.7,-73.9,15z".into(),
        };
        assert_eq!(
            err.to_string(),
            "no origin and destination found in https://www.google.com/maps/@40.7,-73.9,15z"
        );
    }
}
