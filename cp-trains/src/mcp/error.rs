//! Errors surfaced by tool calls.

use crate::domain::InvalidIdentifier;
use crate::schedule::ScheduleError;
use crate::stations::StationError;

/// Anything that can make a station or schedule tool call fail.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Identifier(#[from] InvalidIdentifier),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
