//! Process configuration read from the environment.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::favorites::FavoritesConfig;
use crate::http::{HttpConfig, HttpFetch};
use crate::schedule::ScheduleClientConfig;
use crate::stations::{
    DEFAULT_THRESHOLD, DirectoryClient, DirectoryClientConfig, StationDirectory, StationError,
    StationResolver,
};

const RESOLVER_VAR: &str = "CP_STATION_RESOLVER";
const DIRECTORY_FILE_VAR: &str = "CP_STATION_DIRECTORY";
const THRESHOLD_VAR: &str = "CP_MATCH_THRESHOLD";
const FAVORITES_VAR: &str = "CP_FAVORITES_FILE";
const TIMEOUT_VAR: &str = "CP_HTTP_TIMEOUT_SECS";
const DIRECTORY_URL_VAR: &str = "CP_DIRECTORY_URL";
const SCHEDULE_URL_VAR: &str = "CP_SCHEDULE_URL";

const DEFAULT_DIRECTORY_FILE: &str = "list_ids.json";

/// A configuration value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("invalid value {value:?} for {var}: expected {expected}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// How station names are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverKind {
    /// Fuzzy match against a local directory file.
    Static,
    /// Substring match against the live station directory.
    #[default]
    Live,
}

impl FromStr for ResolverKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "live" => Ok(Self::Live),
            _ => Err(()),
        }
    }
}

/// Everything the binary needs to wire up the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub resolver: ResolverKind,
    /// Station directory file, used by [`ResolverKind::Static`]
    pub directory_file: PathBuf,
    /// Minimum fuzzy match score (0-100)
    pub match_threshold: u8,
    pub favorites: FavoritesConfig,
    pub http: HttpConfig,
    pub directory: DirectoryClientConfig,
    pub schedule: ScheduleClientConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverKind::default(),
            directory_file: PathBuf::from(DEFAULT_DIRECTORY_FILE),
            match_threshold: DEFAULT_THRESHOLD,
            favorites: FavoritesConfig::default(),
            http: HttpConfig::default(),
            directory: DirectoryClientConfig::default(),
            schedule: ScheduleClientConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`; unset or blank variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(value) = get(RESOLVER_VAR) {
            config.resolver = value.parse().map_err(|()| ConfigError {
                var: RESOLVER_VAR,
                value,
                expected: "\"static\" or \"live\"",
            })?;
        }
        if let Some(value) = get(DIRECTORY_FILE_VAR) {
            config.directory_file = PathBuf::from(value);
        }
        if let Some(value) = get(THRESHOLD_VAR) {
            config.match_threshold = match value.parse::<u8>() {
                Ok(threshold) if threshold <= 100 => threshold,
                _ => {
                    return Err(ConfigError {
                        var: THRESHOLD_VAR,
                        value,
                        expected: "an integer from 0 to 100",
                    });
                }
            };
        }
        if let Some(value) = get(FAVORITES_VAR) {
            config.favorites = FavoritesConfig::new(value);
        }
        if let Some(value) = get(TIMEOUT_VAR) {
            let secs = match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError {
                        var: TIMEOUT_VAR,
                        value,
                        expected: "a positive number of seconds",
                    });
                }
            };
            config.http = config.http.with_timeout(secs);
        }
        if let Some(value) = get(DIRECTORY_URL_VAR) {
            config.directory = config.directory.with_base_url(value);
        }
        if let Some(value) = get(SCHEDULE_URL_VAR) {
            config.schedule = config.schedule.with_base_url(value);
        }

        Ok(config)
    }

    /// Build the configured station resolver.
    ///
    /// The static directory is read from disk once, here.
    pub fn station_resolver<F: HttpFetch>(
        &self,
        fetcher: F,
    ) -> Result<StationResolver<F>, StationError> {
        match self.resolver {
            ResolverKind::Static => {
                let directory = StationDirectory::load(&self.directory_file)?
                    .with_threshold(self.match_threshold);
                info!(
                    path = %self.directory_file.display(),
                    stations = directory.len(),
                    "loaded station directory"
                );
                Ok(StationResolver::Static(directory))
            }
            ResolverKind::Live => Ok(StationResolver::Live(DirectoryClient::new(
                fetcher,
                self.directory.clone(),
            )?)),
        }
    }
}
