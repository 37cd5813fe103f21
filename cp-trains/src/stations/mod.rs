//! Station name resolution.
//!
//! Maps a free-text Portuguese station name to a directory record, either
//! by fuzzy matching against a preloaded table or by asking the
//! Infraestruturas de Portugal directory service.

mod client;
mod error;
mod names;
mod resolver;
pub mod similarity;

pub use client::{
    DirectoryClient, DirectoryClientConfig, DirectoryEntry, NodeIdValue, parse_directory,
};
pub use error::StationError;
pub use names::{DEFAULT_THRESHOLD, StationDirectory};
pub use resolver::{NotFound, Resolution, StationResolver};
