//! Favorite stations persisted to a local JSON file.

mod error;
mod store;

pub use error::FavoritesError;
pub use store::{AddOutcome, FavoritesConfig, FavoritesStore, RemoveOutcome};
