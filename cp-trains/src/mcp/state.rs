//! Shared state for tool calls.

use std::sync::Arc;

use crate::favorites::FavoritesStore;
use crate::schedule::ScheduleClient;
use crate::stations::StationResolver;

/// Shared application state.
///
/// Contains the services every tool call needs. Cheap to clone.
pub struct AppState<F> {
    /// Station name resolver (read-only after startup)
    pub resolver: Arc<StationResolver<F>>,

    /// CP schedule client
    pub schedule: Arc<ScheduleClient<F>>,

    /// Favorites store
    pub favorites: Arc<FavoritesStore>,
}

impl<F> AppState<F> {
    /// Create a new app state.
    pub fn new(
        resolver: StationResolver<F>,
        schedule: ScheduleClient<F>,
        favorites: FavoritesStore,
    ) -> Self {
        Self {
            resolver: Arc::new(resolver),
            schedule: Arc::new(schedule),
            favorites: Arc::new(favorites),
        }
    }
}

impl<F> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            schedule: Arc::clone(&self.schedule),
            favorites: Arc::clone(&self.favorites),
        }
    }
}
