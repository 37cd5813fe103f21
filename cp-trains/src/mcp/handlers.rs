//! Tool call implementations.
//!
//! Each operation catches every error at its boundary and turns it into a
//! text reply; nothing propagates to the MCP host.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::domain::NormalizedStationId;
use crate::favorites::{AddOutcome, RemoveOutcome};
use crate::http::HttpFetch;
use crate::stations::Resolution;

use super::error::ToolError;
use super::render;
use super::state::AppState;

/// Text answer to a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReply {
    pub text: String,
    /// Set when the call failed; the text then starts with `"Error "`.
    pub is_error: bool,
}

impl ToolReply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl From<ToolReply> for CallToolResult {
    fn from(reply: ToolReply) -> Self {
        let content = vec![Content::text(reply.text)];
        if reply.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl<F: HttpFetch> AppState<F> {
    /// List the trains calling at a station.
    ///
    /// With `station_id` the name lookup is skipped and the id is used
    /// directly (raw or normalized).
    pub async fn query_trains(&self, station: &str, station_id: Option<&str>) -> ToolReply {
        match self.try_query_trains(station.trim(), station_id).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(station, error = %e, "query_trains failed");
                ToolReply::error(render::error("getting data", e))
            }
        }
    }

    async fn try_query_trains(
        &self,
        station: &str,
        station_id: Option<&str>,
    ) -> Result<ToolReply, ToolError> {
        let explicit_id = station_id.map(str::trim).filter(|id| !id.is_empty());

        let (name, station_id) = match explicit_id {
            Some(id) => {
                let station_id = NormalizedStationId::from_id(id)?;
                let name = if station.is_empty() {
                    station_id.to_string()
                } else {
                    station.to_string()
                };
                (name, station_id)
            }
            None => match self.resolver.resolve(station).await? {
                Resolution::Found(record) => {
                    let station_id = record.station_id()?;
                    (record.name, station_id)
                }
                Resolution::NotFound(reason) => {
                    return Ok(ToolReply::ok(render::station_not_found(station, &reason)));
                }
            },
        };

        let entries = self.schedule.fetch(&station_id).await?;
        if entries.is_empty() {
            return Ok(ToolReply::ok(render::no_information(&name)));
        }

        Ok(ToolReply::ok(render::schedule_board(&name, &entries)))
    }

    /// Resolve a station name without fetching its schedule.
    pub async fn find_station(&self, station: &str) -> ToolReply {
        let station = station.trim();
        match self.try_find_station(station).await {
            Ok(text) => ToolReply::ok(text),
            Err(e) => {
                warn!(station, error = %e, "find_station failed");
                ToolReply::error(render::error("finding station", e))
            }
        }
    }

    async fn try_find_station(&self, station: &str) -> Result<String, ToolError> {
        match self.resolver.resolve(station).await? {
            Resolution::Found(record) => {
                let station_id = record.station_id()?;
                Ok(render::station_found(&record, &station_id))
            }
            Resolution::NotFound(reason) => Ok(render::station_not_found(station, &reason)),
        }
    }

    /// Resolve a station and save it as a favorite.
    pub async fn add_favorite_station(&self, station: &str) -> ToolReply {
        let station = station.trim();
        match self.favorites.add(&self.resolver, station).await {
            Ok(AddOutcome::Added(favorite)) => ToolReply::ok(render::favorite_added(&favorite)),
            Ok(AddOutcome::AlreadyExists) => ToolReply::ok(render::favorite_exists(station)),
            Ok(AddOutcome::StationNotFound(reason)) => {
                ToolReply::ok(render::station_not_found(station, &reason))
            }
            Err(e) => {
                warn!(station, error = %e, "add_favorite_station failed");
                ToolReply::error(render::error("adding favorite", e))
            }
        }
    }

    /// Remove a favorite by exact name.
    pub async fn remove_favorite_station(&self, station: &str) -> ToolReply {
        let station = station.trim();
        match self.favorites.remove(station).await {
            Ok(RemoveOutcome::Removed) => ToolReply::ok(render::favorite_removed(station)),
            Ok(RemoveOutcome::NotPresent) => {
                ToolReply::ok(render::favorite_not_present(station))
            }
            Ok(RemoveOutcome::NoFavorites) => ToolReply::ok(render::NO_FAVORITES),
            Err(e) => {
                warn!(station, error = %e, "remove_favorite_station failed");
                ToolReply::error(render::error("removing favorite", e))
            }
        }
    }

    /// List saved favorites.
    pub async fn get_favorite_stations(&self) -> ToolReply {
        match self.favorites.list().await {
            Ok(Some(favorites)) => ToolReply::ok(render::favorites_list(&favorites)),
            Ok(None) => ToolReply::ok(render::NO_FAVORITES),
            Err(e) => {
                warn!(error = %e, "get_favorite_stations failed");
                ToolReply::error(render::error("reading favorites", e))
            }
        }
    }
}

