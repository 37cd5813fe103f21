//! Static station directory with fuzzy name matching.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::StationRecord;

use super::error::StationError;
use super::resolver::{NotFound, Resolution};
use super::similarity;

/// Default minimum similarity score (out of 100) for a fuzzy match.
pub const DEFAULT_THRESHOLD: u8 = 70;

/// A directory id may be written as a JSON string or number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Text(String),
    Number(u64),
}

impl RawNodeId {
    fn into_string(self) -> String {
        match self {
            RawNodeId::Text(s) => s.trim().to_string(),
            RawNodeId::Number(n) => n.to_string(),
        }
    }
}

/// Preloaded station name → id table.
///
/// Loaded once at startup and read-only afterwards. Lookups score the query
/// against every canonical name and accept the best candidate only if it
/// reaches the threshold.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    /// Sorted by name, so ties resolve deterministically.
    stations: Vec<StationRecord>,
    threshold: f64,
}

impl StationDirectory {
    /// Build a directory from `(name, id)` pairs.
    ///
    /// Entries whose id cannot become a schedule id (empty, non-numeric)
    /// are dropped.
    pub fn new<N, I>(entries: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: Into<String>,
    {
        let mut stations: Vec<StationRecord> = entries
            .into_iter()
            .map(|(name, id)| StationRecord::new(name, id))
            .filter(|record| match record.station_id() {
                Ok(_) => true,
                Err(e) => {
                    warn!(station = %record.name, error = %e, "dropping directory entry");
                    false
                }
            })
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            stations,
            threshold: f64::from(DEFAULT_THRESHOLD),
        }
    }

    /// Set the minimum similarity score (0-100) for a match.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = f64::from(threshold.min(100));
        self
    }

    /// Parse a directory from a JSON object mapping names to ids.
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let raw: BTreeMap<String, RawNodeId> =
            serde_json::from_str(json).map_err(|e| StationError::Directory {
                message: format!("failed to parse directory: {e}"),
            })?;

        Ok(Self::new(
            raw.into_iter().map(|(name, id)| (name, id.into_string())),
        ))
    }

    /// Load a directory from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StationError::Directory {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_json(&json)
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// The minimum score a match must reach.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The highest-scoring station for `query`, regardless of threshold.
    pub fn best_match(&self, query: &str) -> Option<(&StationRecord, f64)> {
        self.stations
            .iter()
            .map(|station| (station, similarity::score(query, &station.name)))
            .fold(None, |best, candidate| match best {
                Some((_, best_score)) if best_score >= candidate.1 => best,
                _ => Some(candidate),
            })
    }

    /// Resolve `query` to a station.
    pub fn resolve(&self, query: &str) -> Resolution {
        match self.best_match(query) {
            None => Resolution::NotFound(NotFound::NoCandidates),
            Some((station, score)) if score >= self.threshold => {
                Resolution::Found(station.clone())
            }
            Some((station, score)) => Resolution::NotFound(NotFound::BelowThreshold {
                closest: station.name.clone(),
                score,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn directory() -> StationDirectory {
        StationDirectory::new([
            ("Lisboa Oriente", "94001"),
            ("Porto-Campanhã", "9402006"),
            ("Porto-São Bento", "9402004"),
            ("Coimbra-B", "9436004"),
        ])
    }

    #[test]
    fn typo_resolves_to_canonical_name() {
        let dir = StationDirectory::new([("Lisboa Oriente", "94001")]);

        match dir.resolve("Lisboa Oriant") {
            Resolution::Found(record) => {
                assert_eq!(record.name, "Lisboa Oriente");
                assert_eq!(record.node_id, "94001");
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_query_is_not_found() {
        let dir = StationDirectory::new([("Lisboa Oriente", "94001")]);

        assert!(matches!(
            dir.resolve("Zzzzz"),
            Resolution::NotFound(NotFound::BelowThreshold { .. })
        ));
    }

    #[test]
    fn empty_directory_has_no_candidates() {
        let dir = StationDirectory::new(Vec::<(String, String)>::new());

        assert!(dir.is_empty());
        assert!(matches!(
            dir.resolve("Porto"),
            Resolution::NotFound(NotFound::NoCandidates)
        ));
    }

    #[test]
    fn picks_closest_of_several() {
        let dir = directory();

        let Resolution::Found(record) = dir.resolve("porto campanha") else {
            panic!("expected a match");
        };
        assert_eq!(record.name, "Porto-Campanhã");
        assert_eq!(record.node_id, "9402006");
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = directory().with_threshold(100);
        assert!(matches!(
            strict.resolve("Lisboa Oriant"),
            Resolution::NotFound(NotFound::BelowThreshold { .. })
        ));

        let lenient = directory().with_threshold(0);
        assert!(matches!(lenient.resolve("Zzzzz"), Resolution::Found(_)));
    }

    #[test]
    fn drops_entries_without_usable_id() {
        let dir = StationDirectory::new([
            ("Lisboa Oriente", "94001"),
            ("Nowhere", ""),
            ("Tua", "N/A"),
            ("Pinhão", "ab123"),
        ]);
        assert_eq!(dir.len(), 1);
        assert!(matches!(
            dir.resolve("Tua"),
            Resolution::NotFound(NotFound::BelowThreshold { .. })
        ));
    }

    #[test]
    fn from_json_accepts_string_and_number_ids() {
        let dir = StationDirectory::from_json(
            r#"{"Lisboa Oriente": "94-31039", "Coimbra-B": 9436004}"#,
        )
        .unwrap();

        assert_eq!(dir.len(), 2);
        let Resolution::Found(record) = dir.resolve("Coimbra-B") else {
            panic!("expected a match");
        };
        assert_eq!(record.node_id, "9436004");
    }

    #[test]
    fn from_json_rejects_non_object() {
        let result = StationDirectory::from_json(r#"["Lisboa Oriente"]"#);
        assert!(matches!(result, Err(StationError::Directory { .. })));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"Lisboa Oriente": "94001"}}"#).unwrap();

        let dir = StationDirectory::load(file.path()).unwrap();
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn load_missing_file_fails() {
        let result = StationDirectory::load("/nonexistent/list_ids.json");
        assert!(matches!(result, Err(StationError::Directory { .. })));
    }
}
