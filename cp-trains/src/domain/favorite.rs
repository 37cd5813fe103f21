//! Favorite station bookmarks.

use serde::{Deserialize, Serialize};

/// A station saved by the user.
///
/// `station_name` is kept exactly as the user typed it; favorites are unique
/// by that name. `station_id` is the normalized schedule identifier, so a
/// favorite can be queried without resolving its name again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteStation {
    pub station_id: String,
    pub station_name: String,
}

impl FavoriteStation {
    pub fn new(station_name: impl Into<String>, station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            station_name: station_name.into(),
        }
    }
}
