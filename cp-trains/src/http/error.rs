//! Transport error types.

/// Maximum number of body characters kept in error messages.
pub(crate) const MAX_BODY_CHARS: usize = 500;

/// Errors that can occur while talking to an upstream service.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failure or other HTTP-level error
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// Upstream answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// A URL could not be built for the request
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout {
                url: err
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "<unknown>".to_string()),
            }
        } else {
            FetchError::Http(err)
        }
    }
}

/// Truncate an upstream body for inclusion in an error message.
pub(crate) fn snippet(body: &str) -> String {
    body.chars().take(MAX_BODY_CHARS).collect()
}
