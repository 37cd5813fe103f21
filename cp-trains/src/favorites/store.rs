//! File-backed favorites collection.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::FavoriteStation;
use crate::http::HttpFetch;
use crate::stations::{NotFound, Resolution, StationResolver};

use super::error::FavoritesError;

/// Schema version written to new files.
const CURRENT_VERSION: u32 = 1;

fn current_version() -> u32 {
    CURRENT_VERSION
}

/// On-disk favorites document.
///
/// Files without a `version` field predate versioning and are read as
/// version 1.
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    #[serde(default = "current_version")]
    version: u32,
    #[serde(default)]
    stations: Vec<FavoriteStation>,
}

impl Default for FavoritesFile {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            stations: Vec::new(),
        }
    }
}

/// Configuration for the favorites store.
#[derive(Debug, Clone)]
pub struct FavoritesConfig {
    /// Path to the favorites file.
    pub path: PathBuf,
}

impl FavoritesConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self::new("favorite_stations.json")
    }
}

/// Result of adding a favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(FavoriteStation),
    AlreadyExists,
    StationNotFound(NotFound),
}

/// Result of removing a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The collection exists but has no station by that name.
    NotPresent,
    /// No favorites file exists yet.
    NoFavorites,
}

/// Persisted favorites collection, unique by station name.
///
/// Every mutation rereads the file, applies the change in memory and
/// replaces the file atomically. Mutations are serialized by an async
/// mutex, so concurrent tool calls cannot lose each other's updates.
#[derive(Debug)]
pub struct FavoritesStore {
    config: FavoritesConfig,
    lock: Mutex<()>,
    /// Makes the final rename fail, for exercising the error path.
    #[cfg(test)]
    fail_persist: std::sync::atomic::AtomicBool,
}

impl FavoritesStore {
    pub fn new(config: FavoritesConfig) -> Self {
        Self {
            config,
            lock: Mutex::new(()),
            #[cfg(test)]
            fail_persist: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Get the favorites file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// The stored favorites, or `None` if no favorites file exists yet.
    pub async fn list(&self) -> Result<Option<Vec<FavoriteStation>>, FavoritesError> {
        let _guard = self.lock.lock().await;
        Ok(self.read()?.map(|file| file.stations))
    }

    /// Resolve `station_name` and save it as a favorite.
    ///
    /// The name is stored exactly as given, together with the resolved
    /// station's normalized schedule id.
    pub async fn add<F: HttpFetch>(
        &self,
        resolver: &StationResolver<F>,
        station_name: &str,
    ) -> Result<AddOutcome, FavoritesError> {
        let record = match resolver.resolve(station_name).await? {
            Resolution::Found(record) => record,
            Resolution::NotFound(reason) => return Ok(AddOutcome::StationNotFound(reason)),
        };
        let station_id = record.station_id()?;

        self.insert(FavoriteStation::new(station_name, station_id.as_str()))
            .await
    }

    /// Save an already-resolved favorite.
    pub async fn insert(&self, favorite: FavoriteStation) -> Result<AddOutcome, FavoritesError> {
        let _guard = self.lock.lock().await;

        let mut file = self.read()?.unwrap_or_default();
        if file
            .stations
            .iter()
            .any(|s| s.station_name == favorite.station_name)
        {
            debug!(station = %favorite.station_name, "favorite already present");
            return Ok(AddOutcome::AlreadyExists);
        }

        file.stations.push(favorite.clone());
        self.write(&file)?;

        info!(
            station = %favorite.station_name,
            station_id = %favorite.station_id,
            "added favorite"
        );
        Ok(AddOutcome::Added(favorite))
    }

    /// Remove the favorite with exactly this name.
    ///
    /// Never creates the favorites file.
    pub async fn remove(&self, station_name: &str) -> Result<RemoveOutcome, FavoritesError> {
        let _guard = self.lock.lock().await;

        let Some(mut file) = self.read()? else {
            return Ok(RemoveOutcome::NoFavorites);
        };

        let before = file.stations.len();
        file.stations.retain(|s| s.station_name != station_name);
        if file.stations.len() == before {
            return Ok(RemoveOutcome::NotPresent);
        }

        self.write(&file)?;

        info!(station = station_name, "removed favorite");
        Ok(RemoveOutcome::Removed)
    }

    fn io_error(&self, source: std::io::Error) -> FavoritesError {
        FavoritesError::Io {
            path: self.config.path.clone(),
            source,
        }
    }

    fn read(&self) -> Result<Option<FavoritesFile>, FavoritesError> {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Some(FavoritesFile::default()));
        }

        let file: FavoritesFile =
            serde_json::from_str(&contents).map_err(|e| FavoritesError::Corrupt {
                path: self.config.path.clone(),
                message: e.to_string(),
            })?;

        if file.version != CURRENT_VERSION {
            return Err(FavoritesError::UnsupportedVersion {
                path: self.config.path.clone(),
                version: file.version,
            });
        }

        Ok(Some(file))
    }

    /// Replace the favorites file with `file`.
    ///
    /// The new contents go to a temporary file in the same directory, which
    /// is then renamed over the old one. On failure the old file is left as
    /// it was.
    fn write(&self, file: &FavoritesFile) -> Result<(), FavoritesError> {
        let path = &self.config.path;

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(file).map_err(|e| FavoritesError::Corrupt {
            path: path.clone(),
            message: format!("failed to serialize favorites: {e}"),
        })?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| self.io_error(e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;

        #[cfg(test)]
        if self.fail_persist.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(self.io_error(std::io::Error::other("rename failed")));
        }

        tmp.persist(path).map_err(|e| self.io_error(e.error))?;

        Ok(())
    }
}
