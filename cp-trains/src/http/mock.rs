//! In-memory transport for tests and offline development.
//!
//! Serves canned responses keyed by the full request URL, and records
//! every request it sees so tests can assert on URLs and headers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::Url;
use reqwest::header::HeaderMap;

use super::HttpFetch;
use super::error::FetchError;

/// A canned upstream response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 OK with the given body.
    Body(String),
    /// A non-success status with the given body.
    Status(u16, String),
    /// The request times out.
    Timeout,
}

/// A request seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: HeaderMap,
}

/// Mock transport that serves responses from memory.
///
/// URLs with no registered response answer 404.
#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockFetcher {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a response for a URL, replacing any previous one.
    pub fn respond(&self, url: impl Into<String>, response: MockResponse) -> &Self {
        let mut responses = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        responses.insert(url.into(), response);
        self
    }

    /// Register a 200 response with the given body.
    pub fn respond_body(&self, url: impl Into<String>, body: impl Into<String>) -> &Self {
        self.respond(url, MockResponse::Body(body.into()))
    }

    /// All requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }
}

impl HttpFetch for MockFetcher {
    async fn get(&self, url: &Url, headers: &HeaderMap) -> Result<String, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });

        let response = self
            .responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(url.as_str())
            .cloned();

        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(status, message)) => {
                Err(FetchError::Status { status, message })
            }
            Some(MockResponse::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                status: 404,
                message: format!("no mock response for {url}"),
            }),
        }
    }
}
