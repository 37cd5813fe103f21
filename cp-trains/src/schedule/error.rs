//! Schedule client error types.

use crate::http::FetchError;

/// Errors from fetching or parsing a station schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The schedule endpoint could not be reached or answered non-2xx
    #[error("error getting schedules: {0}")]
    Fetch(#[from] FetchError),

    /// The response was not JSON, or JSON of an unexpected shape
    #[error("unexpected schedule response: {message}")]
    UpstreamFormat {
        message: String,
        /// Start of the offending response body
        body: String,
    },
}
