//! CP train schedules over MCP.
//!
//! Resolves a typed Portuguese station name to a station id, fetches the
//! trains calling there from Comboios de Portugal, and renders them as text
//! for an AI agent. Favorite stations are kept in a local JSON file.

pub mod config;
pub mod domain;
pub mod favorites;
pub mod http;
pub mod mcp;
pub mod schedule;
pub mod stations;
