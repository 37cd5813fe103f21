//! Domain types for CP station lookups.
//!
//! Identifiers are validated at construction time, so code that receives a
//! [`NormalizedStationId`] can pass it to the schedule endpoint as-is.

mod favorite;
mod schedule;
mod station;

pub use favorite::FavoriteStation;
pub use schedule::ScheduleEntry;
pub use station::{InvalidIdentifier, NormalizedStationId, StationRecord};
