//! Infraestruturas de Portugal station directory client.

use reqwest::Url;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::StationRecord;
use crate::http::{FetchError, HttpFetch, browser_headers, snippet};

use super::error::StationError;
use super::resolver::{NotFound, Resolution};

/// Default base URL for the station name lookup.
pub const DEFAULT_BASE_URL: &str =
    "https://www.infraestruturasdeportugal.pt/negocios-e-servicos/estacao-nome";

/// Site the directory requests pretend to originate from.
const SITE: &str = "https://www.infraestruturasdeportugal.pt";

/// One entry of a directory response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEntry {
    #[serde(rename = "Nome", default)]
    pub name: Option<String>,
    #[serde(rename = "NodeID", default)]
    pub node_id: Option<NodeIdValue>,
}

/// The directory sends `NodeID` as either a number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeIdValue {
    Number(u64),
    Text(String),
}

impl DirectoryEntry {
    /// The entry as a station record, if it carries a usable id.
    ///
    /// Ids that cannot become a schedule id (empty, `"N/A"`, ...) are
    /// treated as missing.
    fn into_record(self) -> Option<StationRecord> {
        let node_id = match self.node_id? {
            NodeIdValue::Number(n) => n.to_string(),
            NodeIdValue::Text(s) => s.trim().to_string(),
        };
        let record = StationRecord::new(self.name.unwrap_or_default(), node_id);
        record.station_id().ok()?;
        Some(record)
    }
}

/// Configuration for the directory client.
#[derive(Debug, Clone)]
pub struct DirectoryClientConfig {
    /// Base URL; the station name is appended as a path segment
    pub base_url: String,
}

impl DirectoryClientConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for DirectoryClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Live station directory lookup.
///
/// Queries the directory by name fragment and accepts the first returned
/// station whose name contains the query, ignoring case.
#[derive(Debug, Clone)]
pub struct DirectoryClient<F> {
    fetcher: F,
    base_url: Url,
    headers: HeaderMap,
}

impl<F: HttpFetch> DirectoryClient<F> {
    /// Create a new directory client.
    pub fn new(fetcher: F, config: DirectoryClientConfig) -> Result<Self, StationError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.base_url).into());
        }

        Ok(Self {
            fetcher,
            base_url,
            headers: browser_headers(SITE),
        })
    }

    /// The lookup URL for a station name.
    fn lookup_url(&self, query: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(query);
        Ok(url)
    }

    /// Resolve `query` against the live directory.
    pub async fn resolve(&self, query: &str) -> Result<Resolution, StationError> {
        let url = self.lookup_url(query)?;
        let body = self.fetcher.get(&url, &self.headers).await?;
        let entries = parse_directory(query, &body)?;

        if entries.is_empty() {
            return Ok(Resolution::NotFound(NotFound::NoCandidates));
        }

        let needle = query.to_lowercase();
        for entry in entries {
            debug!(?entry, "checking station");
            let matches = entry
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle));
            if !matches {
                continue;
            }
            match entry.into_record() {
                Some(record) => return Ok(Resolution::Found(record)),
                None => debug!("skipping matching entry without a usable NodeID"),
            }
        }

        Ok(Resolution::NotFound(NotFound::NoMatch))
    }
}

/// Parse a directory response body.
///
/// Accepts a bare list of entries or an object carrying the list under
/// `response`. List items that are not entry-shaped objects are skipped.
pub fn parse_directory(query: &str, body: &str) -> Result<Vec<DirectoryEntry>, StationError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        let body = snippet(body);
        warn!(query, error = %e, %body, "station directory returned invalid JSON");
        StationError::InvalidJson {
            query: query.to_string(),
            message: e.to_string(),
            body,
        }
    })?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("response") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => Vec::new(),
            Some(_) => {
                return Err(StationError::UnexpectedShape {
                    query: query.to_string(),
                });
            }
        },
        _ => {
            return Err(StationError::UnexpectedShape {
                query: query.to_string(),
            });
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping malformed directory entry");
                None
            }
        })
        .collect())
}
