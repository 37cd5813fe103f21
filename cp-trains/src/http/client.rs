//! reqwest-backed transport.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderMap;
use tracing::debug;

use super::HttpFetch;
use super::error::{FetchError, snippet};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration shared by every upstream request.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HttpConfig {
    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Production transport backed by a `reqwest::Client`.
///
/// Requests are never retried; a timeout surfaces as
/// [`FetchError::Timeout`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new transport with the given configuration.
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }
}

impl HttpFetch for HttpFetcher {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<String, FetchError> {
        debug!(%url, "upstream GET");

        let response = self
            .http
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: snippet(&body),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpConfig::default().with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn fetcher_creation() {
        assert!(HttpFetcher::new(&HttpConfig::default()).is_ok());
    }
}
