//! Tool input types.

use rmcp::schemars;
use serde::Deserialize;

/// Input for querying the trains at a station.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct QueryTrainsInput {
    #[schemars(description = "Station name (ex: Porto-Campanhã, Lisboa Oriente)")]
    pub station: String,
    #[schemars(
        description = "Optional station id (raw like 9431039 or normalized like 94-31039); skips name lookup"
    )]
    pub station_id: Option<String>,
}

/// Input for tools that take a single station name.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct StationInput {
    #[schemars(description = "Station name (ex: Porto-Campanhã, Lisboa Oriente)")]
    pub station: String,
}
