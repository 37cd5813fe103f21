//! Station lookup error types.

use crate::http::FetchError;

/// Errors that can occur while resolving a station name.
///
/// A name that simply matches nothing is not an error; see
/// [`Resolution::NotFound`](super::Resolution::NotFound).
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The directory service could not be reached
    #[error("error accessing the station directory: {0}")]
    Fetch(#[from] FetchError),

    /// The directory answered with something that is not JSON
    #[error("invalid response from the station directory for {query:?}: {message}")]
    InvalidJson {
        query: String,
        message: String,
        /// Start of the offending response body
        body: String,
    },

    /// The directory answered with JSON that is neither a list nor an object
    #[error("invalid response format from the station directory for {query:?}")]
    UnexpectedShape { query: String },

    /// The static directory file could not be loaded
    #[error("station directory error: {message}")]
    Directory { message: String },
}
