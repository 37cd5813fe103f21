//! Favorites store error types.

use std::path::PathBuf;

use crate::domain::InvalidIdentifier;
use crate::stations::StationError;

/// Errors from reading or updating the favorites file.
///
/// A favorites file that does not exist yet is not an error.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    /// The file exists but could not be read or written
    #[error("failed to access favorites file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid favorites document
    #[error("favorites file {} is corrupt: {message}", path.display())]
    Corrupt { path: PathBuf, message: String },

    /// The file was written by an incompatible version
    #[error("favorites file {} has unsupported version {version}", path.display())]
    UnsupportedVersion { path: PathBuf, version: u32 },

    /// Resolving the station name failed
    #[error(transparent)]
    Station(#[from] StationError),

    /// The resolved station id could not be normalized
    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),
}
