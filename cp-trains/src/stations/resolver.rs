//! Station name resolution.

use std::fmt;

use tracing::info;

use crate::domain::StationRecord;
use crate::http::HttpFetch;

use super::client::DirectoryClient;
use super::error::StationError;
use super::names::StationDirectory;

/// Why a station name could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum NotFound {
    /// The query was empty or whitespace.
    BlankQuery,
    /// The directory returned no stations at all.
    NoCandidates,
    /// Stations were returned but none contained the query.
    NoMatch,
    /// The closest station scored below the match threshold.
    BelowThreshold { closest: String, score: f64 },
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFound::BlankQuery => write!(f, "blank query"),
            NotFound::NoCandidates => write!(f, "no stations returned"),
            NotFound::NoMatch => write!(f, "no station name contains the query"),
            NotFound::BelowThreshold { closest, score } => {
                write!(f, "closest station {closest:?} scored {score:.1}")
            }
        }
    }
}

/// Outcome of resolving a station name.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(StationRecord),
    NotFound(NotFound),
}

/// Station name resolver.
///
/// A deployment picks one strategy: a preloaded [`StationDirectory`] with
/// fuzzy matching, or the live [`DirectoryClient`] with substring matching.
#[derive(Debug, Clone)]
pub enum StationResolver<F> {
    Static(StationDirectory),
    Live(DirectoryClient<F>),
}

impl<F: HttpFetch> StationResolver<F> {
    /// Short name of the active strategy, for logs.
    pub fn strategy(&self) -> &'static str {
        match self {
            StationResolver::Static(_) => "static",
            StationResolver::Live(_) => "live",
        }
    }

    /// Resolve a free-text station name.
    pub async fn resolve(&self, query: &str) -> Result<Resolution, StationError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Resolution::NotFound(NotFound::BlankQuery));
        }

        let resolution = match self {
            StationResolver::Static(directory) => directory.resolve(query),
            StationResolver::Live(client) => client.resolve(query).await?,
        };

        match &resolution {
            Resolution::Found(record) => info!(
                query,
                station = %record.name,
                node_id = %record.node_id,
                strategy = self.strategy(),
                "resolved station"
            ),
            Resolution::NotFound(reason) => info!(
                query,
                %reason,
                strategy = self.strategy(),
                "station not found"
            ),
        }

        Ok(resolution)
    }
}
