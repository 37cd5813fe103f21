//! Upstream HTTP transport.
//!
//! Both upstream services (the station directory and the CP schedule
//! endpoint) are plain JSON-over-GET APIs. Clients talk to them through the
//! [`HttpFetch`] trait so that tests can swap in [`MockFetcher`].

mod client;
mod error;
mod mock;

use std::future::Future;

use reqwest::Url;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT,
};

pub use client::{HttpConfig, HttpFetcher};
pub(crate) use error::snippet;
pub use error::FetchError;
pub use mock::{MockFetcher, MockResponse, RecordedRequest};

/// A transport able to GET a URL and hand back the response body.
///
/// Implementations must fail with [`FetchError::Status`] on non-2xx
/// responses; the body of a successful response is returned untouched so
/// callers can tell malformed JSON apart from transport failures.
pub trait HttpFetch: Send + Sync {
    fn get(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Browser-like user agent; both upstream sites reject obvious bots.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Request headers that make a request look like it came from `site`'s own
/// front end.
///
/// `site` must be a plain origin such as `https://www.cp.pt`.
pub fn browser_headers(site: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("pt-PT,pt;q=0.9,en-US;q=0.8,en;q=0.7"),
    );
    headers.insert(ORIGIN, HeaderValue::from_static(site));
    if let Ok(referer) = HeaderValue::from_str(&format!("{site}/")) {
        headers.insert(REFERER, referer);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_headers_for_site() {
        let headers = browser_headers("https://www.cp.pt");

        assert_eq!(headers[ORIGIN], "https://www.cp.pt");
        assert_eq!(headers[REFERER], "https://www.cp.pt/");
        assert!(headers.contains_key(USER_AGENT));
        assert_eq!(headers[ACCEPT], "application/json, text/plain, */*");
    }
}
