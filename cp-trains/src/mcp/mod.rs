//! MCP tool layer.
//!
//! Exposes station lookups, schedules and favorites as MCP tools. Every tool
//! answers with human-readable text; failures are rendered as
//! `"Error ...: <message>"` and flagged with the MCP error bit rather than
//! surfacing as protocol errors.

mod dto;
mod error;
mod handlers;
pub mod render;
mod server;
mod state;

pub use dto::*;
pub use error::ToolError;
pub use handlers::ToolReply;
pub use server::CpTrainsServer;
pub use state::AppState;
