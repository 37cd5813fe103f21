//! Station identifier types.

use std::fmt;
use std::str::FromStr;

/// Error returned when a station identifier cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station identifier {id:?}: {reason}")]
pub struct InvalidIdentifier {
    id: String,
    reason: &'static str,
}

impl InvalidIdentifier {
    fn new(id: &str, reason: &'static str) -> Self {
        Self {
            id: id.to_string(),
            reason,
        }
    }
}

/// A station as listed by a station directory.
///
/// `node_id` is the directory's raw identifier (e.g. `"9431039"`). It is
/// never empty: lookups that fail produce a not-found outcome instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    /// Canonical station name as spelled by the directory.
    pub name: String,
    /// Raw directory identifier.
    pub node_id: String,
}

impl StationRecord {
    pub fn new(name: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node_id: node_id.into(),
        }
    }

    /// The identifier the schedule endpoint expects for this station.
    pub fn station_id(&self) -> Result<NormalizedStationId, InvalidIdentifier> {
        NormalizedStationId::from_id(&self.node_id)
    }
}

/// A station identifier in the compound `"<prefix>-<suffix>"` form used by
/// the CP schedule endpoint.
///
/// The prefix is the first two characters of the raw directory id and the
/// suffix is the remainder with leading zeros removed. The suffix is never
/// empty: an all-zero remainder becomes `"0"`.
///
/// # Examples
///
/// ```
/// use cp_trains::domain::NormalizedStationId;
///
/// let id = NormalizedStationId::normalize("940144007").unwrap();
/// assert_eq!(id.as_str(), "94-144007");
///
/// // Already-normalized ids are accepted by `from_id`
/// let same = NormalizedStationId::from_id("94-144007").unwrap();
/// assert_eq!(id, same);
///
/// // Too short to split
/// assert!(NormalizedStationId::normalize("9").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NormalizedStationId {
    value: String,
    /// Byte offset of the `-` separator in `value`.
    dash: usize,
}

impl NormalizedStationId {
    /// Normalize a raw directory identifier.
    ///
    /// Fails if `raw` has fewer than two characters or anything other than
    /// ASCII digits.
    pub fn normalize(raw: &str) -> Result<Self, InvalidIdentifier> {
        if raw.len() < 2 {
            return Err(InvalidIdentifier::new(
                raw,
                "must be at least 2 characters",
            ));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidIdentifier::new(raw, "must contain only digits"));
        }

        let (prefix, rest) = raw.split_at(2);
        Ok(Self::join(prefix, rest))
    }

    /// Parse an identifier that is already in `"dd-ddd"` form.
    ///
    /// Leading zeros in the suffix are stripped, so the result is identical
    /// to normalizing the equivalent raw id.
    pub fn parse(normalized: &str) -> Result<Self, InvalidIdentifier> {
        let (prefix, suffix) = normalized
            .split_once('-')
            .ok_or_else(|| InvalidIdentifier::new(normalized, "missing '-' separator"))?;

        if prefix.len() != 2 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidIdentifier::new(
                normalized,
                "prefix must be exactly 2 digits",
            ));
        }

        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidIdentifier::new(
                normalized,
                "suffix must be a non-empty run of digits",
            ));
        }

        Ok(Self::join(prefix, suffix))
    }

    /// Accept either a raw directory id or an already-normalized one.
    pub fn from_id(id: &str) -> Result<Self, InvalidIdentifier> {
        if id.contains('-') {
            Self::parse(id)
        } else {
            Self::normalize(id)
        }
    }

    fn join(prefix: &str, rest: &str) -> Self {
        let suffix = match rest.trim_start_matches('0') {
            "" => "0",
            stripped => stripped,
        };

        Self {
            value: format!("{prefix}-{suffix}"),
            dash: prefix.len(),
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The two-character prefix.
    pub fn prefix(&self) -> &str {
        &self.value[..self.dash]
    }

    /// The suffix, without leading zeros.
    pub fn suffix(&self) -> &str {
        &self.value[self.dash + 1..]
    }
}

impl FromStr for NormalizedStationId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Debug for NormalizedStationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedStationId({})", self.value)
    }
}

impl fmt::Display for NormalizedStationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_zeros() {
        let id = NormalizedStationId::normalize("940144007").unwrap();
        assert_eq!(id.as_str(), "94-144007");
        assert_eq!(id.prefix(), "94");
        assert_eq!(id.suffix(), "144007");
    }

    #[test]
    fn normalize_without_leading_zeros() {
        let id = NormalizedStationId::normalize("9431039").unwrap();
        assert_eq!(id.as_str(), "94-31039");
    }

    #[test]
    fn all_zero_suffix_keeps_single_zero() {
        assert_eq!(
            NormalizedStationId::normalize("94000").unwrap().as_str(),
            "94-0"
        );
        assert_eq!(NormalizedStationId::normalize("94").unwrap().as_str(), "94-0");
    }

    #[test]
    fn reject_short_ids() {
        assert!(NormalizedStationId::normalize("").is_err());
        assert!(NormalizedStationId::normalize("9").is_err());
    }

    #[test]
    fn reject_non_digit_ids() {
        assert!(NormalizedStationId::normalize("ãé007").is_err());
        assert!(NormalizedStationId::normalize("N/A").is_err());
        assert!(NormalizedStationId::normalize("ab123").is_err());
        assert!(NormalizedStationId::normalize("94 31039").is_err());

        let err = NormalizedStationId::from_id("N/A").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station identifier \"N/A\": must contain only digits"
        );
    }

    #[test]
    fn parse_normalized() {
        let id = NormalizedStationId::parse("94-31039").unwrap();
        assert_eq!(id.as_str(), "94-31039");

        let padded = NormalizedStationId::parse("94-0031039").unwrap();
        assert_eq!(padded.as_str(), "94-31039");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(NormalizedStationId::parse("9431039").is_err());
        assert!(NormalizedStationId::parse("9-431039").is_err());
        assert!(NormalizedStationId::parse("94-").is_err());
        assert!(NormalizedStationId::parse("94-12a").is_err());
        assert!(NormalizedStationId::parse("ab-123").is_err());
    }

    #[test]
    fn from_id_accepts_both_forms() {
        let raw = NormalizedStationId::from_id("9431039").unwrap();
        let normalized = NormalizedStationId::from_id("94-31039").unwrap();
        assert_eq!(raw, normalized);
        assert_eq!("94-31039".parse::<NormalizedStationId>().unwrap(), raw);
    }

    #[test]
    fn record_station_id() {
        let record = StationRecord::new("Lisboa Oriente", "9431039");
        assert_eq!(record.station_id().unwrap().as_str(), "94-31039");
    }

    #[test]
    fn display_and_debug() {
        let id = NormalizedStationId::normalize("9431039").unwrap();
        assert_eq!(format!("{}", id), "94-31039");
        assert_eq!(format!("{:?}", id), "NormalizedStationId(94-31039)");
    }

    #[test]
    fn error_display() {
        let err = NormalizedStationId::normalize("9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid station identifier \"9\": must be at least 2 characters"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The prefix is always the first two characters of the raw id
        #[test]
        fn prefix_is_first_two_chars(raw in "[0-9]{2,12}") {
            let id = NormalizedStationId::normalize(&raw).unwrap();
            prop_assert_eq!(id.prefix(), &raw[..2]);
        }

        /// The suffix is the remainder without leading zeros, never empty
        #[test]
        fn suffix_strips_leading_zeros(raw in "[0-9]{2,12}") {
            let id = NormalizedStationId::normalize(&raw).unwrap();
            let stripped = raw[2..].trim_start_matches('0');
            let expected = if stripped.is_empty() { "0" } else { stripped };
            prop_assert_eq!(id.suffix(), expected);
            prop_assert!(!id.suffix().starts_with('0') || id.suffix() == "0");
        }

        /// Normalizing is idempotent through `from_id`
        #[test]
        fn normalized_form_reparses(raw in "[0-9]{2,12}") {
            let id = NormalizedStationId::normalize(&raw).unwrap();
            let reparsed = NormalizedStationId::from_id(id.as_str()).unwrap();
            prop_assert_eq!(reparsed, id);
        }

        /// Every accepted raw id reparses to the same value
        #[test]
        fn normalize_and_parse_agree(raw in "[0-9a]{0,8}") {
            if let Ok(id) = NormalizedStationId::normalize(&raw) {
                prop_assert_eq!(NormalizedStationId::parse(id.as_str()), Ok(id));
            }
        }

        /// Anything shorter than two characters is rejected
        #[test]
        fn short_ids_rejected(raw in "[0-9]{0,1}") {
            prop_assert!(NormalizedStationId::normalize(&raw).is_err());
        }
    }
}
