//! rmcp server exposing the tools over MCP.

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::http::HttpFetcher;

use super::dto::{QueryTrainsInput, StationInput};
use super::state::AppState;

const INSTRUCTIONS: &str = "CP (Comboios de Portugal) train departures. \
    Use query_trains with a station name to list the trains calling there; \
    use find_station to check how a name resolves before querying or saving it. \
    Favorites are kept in a local file and managed with add_favorite_station, \
    remove_favorite_station and get_favorite_stations.";

/// MCP server for CP train schedules and favorite stations.
#[derive(Clone)]
pub struct CpTrainsServer {
    state: AppState<HttpFetcher>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CpTrainsServer {
    pub fn new(state: AppState<HttpFetcher>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "List the trains calling at a Portuguese train station: number, service, origin, destination, times, platform and delay."
    )]
    async fn query_trains(
        &self,
        Parameters(QueryTrainsInput {
            station,
            station_id,
        }): Parameters<QueryTrainsInput>,
    ) -> Result<CallToolResult, McpError> {
        let reply = self
            .state
            .query_trains(&station, station_id.as_deref())
            .await;
        Ok(reply.into())
    }

    #[tool(
        description = "Resolve a station name and report its canonical name and identifiers without fetching trains."
    )]
    async fn find_station(
        &self,
        Parameters(StationInput { station }): Parameters<StationInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.state.find_station(&station).await.into())
    }

    #[tool(description = "Add a station to the user's favorites.")]
    async fn add_favorite_station(
        &self,
        Parameters(StationInput { station }): Parameters<StationInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.state.add_favorite_station(&station).await.into())
    }

    #[tool(description = "Remove a station from the user's favorites (exact name).")]
    async fn remove_favorite_station(
        &self,
        Parameters(StationInput { station }): Parameters<StationInput>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.state.remove_favorite_station(&station).await.into())
    }

    #[tool(description = "List the user's favorite stations.")]
    async fn get_favorite_stations(&self) -> Result<CallToolResult, McpError> {
        Ok(self.state.get_favorite_stations().await.into())
    }
}

#[tool_handler]
impl ServerHandler for CpTrainsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
