//! Text rendering for tool replies.
//!
//! These strings are the tool contract seen by the agent; keep them stable.

use std::fmt::{Display, Write};

use crate::domain::{FavoriteStation, NormalizedStationId, ScheduleEntry, StationRecord};
use crate::stations::NotFound;

/// Separator between trains on a schedule board.
pub const TRAIN_SEPARATOR: &str = "\n\n---\n\n";

/// Reply when the favorites collection is missing or empty.
pub const NO_FAVORITES: &str = "No favorite stations found.";

/// Reply for a name that resolved to nothing.
///
/// An empty directory answer and a blank name get their own wording, so the
/// agent can tell "nothing came back" from "nothing matched".
pub fn station_not_found(query: &str, reason: &NotFound) -> String {
    match reason {
        NotFound::NoCandidates => format!("Station '{query}' not found (no stations returned)."),
        NotFound::BlankQuery => format!("Station '{query}' not found (no name given)."),
        NotFound::NoMatch | NotFound::BelowThreshold { .. } => {
            format!("Station '{query}' not found.")
        }
    }
}

pub fn station_found(record: &StationRecord, station_id: &NormalizedStationId) -> String {
    format!(
        "Station '{}': node id {}, schedule id {}",
        record.name, record.node_id, station_id
    )
}

pub fn no_information(station: &str) -> String {
    format!("No information available for {station}.")
}

/// Render the trains calling at `station`.
pub fn schedule_board(station: &str, entries: &[ScheduleEntry]) -> String {
    let blocks: Vec<String> = entries.iter().map(ToString::to_string).collect();
    format!("Trains in {station}:\n\n{}\n\n", blocks.join(TRAIN_SEPARATOR))
}

pub fn favorite_added(favorite: &FavoriteStation) -> String {
    format!(
        "Station '{}' added to favorites (id {}).",
        favorite.station_name, favorite.station_id
    )
}

pub fn favorite_exists(station: &str) -> String {
    format!("Station '{station}' is already in your favorites.")
}

pub fn favorite_removed(station: &str) -> String {
    format!("Station '{station}' removed from favorites.")
}

pub fn favorite_not_present(station: &str) -> String {
    format!("Station '{station}' is not in your favorites.")
}

pub fn favorites_list(favorites: &[FavoriteStation]) -> String {
    if favorites.is_empty() {
        return NO_FAVORITES.to_string();
    }

    let mut out = String::from("Favorite stations:");
    for favorite in favorites {
        let _ = write!(
            out,
            "\n- {} ({})",
            favorite.station_name, favorite.station_id
        );
    }
    out
}

/// `"Error <context>: <message>"`.
pub fn error(context: &str, err: impl Display) -> String {
    format!("Error {context}: {err}")
}
