//! Conversion from schedule DTOs to display entries.

use serde_json::Value;
use tracing::warn;

use crate::domain::ScheduleEntry;
use crate::http::snippet;

use super::error::ScheduleError;
use super::types::{Designation, RawTrain, Scalar};

fn text_or(value: Option<Scalar>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}

fn designation_or(value: Option<Designation>, fallback: &str) -> String {
    text_or(value.and_then(|d| d.designation), fallback)
}

impl From<RawTrain> for ScheduleEntry {
    fn from(train: RawTrain) -> Self {
        Self {
            train_number: text_or(train.train_number, Self::UNKNOWN_TRAIN_NUMBER),
            service_type: designation_or(train.train_service, Self::UNKNOWN_SERVICE_TYPE),
            origin: designation_or(train.train_origin, Self::UNKNOWN_ORIGIN),
            destination: designation_or(train.train_destination, Self::UNKNOWN_DESTINATION),
            departure_time: text_or(train.departure_time, Self::UNKNOWN_TIME),
            arrival_time: text_or(train.arrival_time, Self::UNKNOWN_TIME),
            platform: text_or(train.platform, Self::UNKNOWN_PLATFORM),
            // `null` means "on time"; a missing field is treated the same
            delay: text_or(train.delay, Self::NO_DELAY),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Build a format error carrying a snippet of the offending body.
fn format_error(message: String, body: &str) -> ScheduleError {
    let body = snippet(body);
    warn!(%message, %body, "unexpected schedule response");
    ScheduleError::UpstreamFormat { message, body }
}

/// Parse a schedule response body into display entries.
///
/// An empty body, `null`, `[]` or `{}` means the station has no trains and
/// yields an empty list. Anything other than a list of train objects is an
/// [`ScheduleError::UpstreamFormat`] error.
pub fn parse_schedule(body: &str) -> Result<Vec<ScheduleEntry>, ScheduleError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| format_error(format!("invalid JSON: {e}"), body))?;

    let trains = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) if map.is_empty() => return Ok(Vec::new()),
        Value::Array(trains) => trains,
        other => {
            return Err(format_error(
                format!("expected a list of trains, got {}", kind(&other)),
                body,
            ));
        }
    };

    trains
        .into_iter()
        .enumerate()
        .map(|(idx, train)| {
            serde_json::from_value::<RawTrain>(train)
                .map(ScheduleEntry::from)
                .map_err(|e| format_error(format!("train #{idx}: {e}"), body))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_full_train() {
        let entries = parse_schedule(
            r#"[{
                "trainNumber": 4410,
                "trainService": {"designation": "Intercidades"},
                "trainOrigin": {"designation": "Porto-Campanhã"},
                "trainDestination": {"designation": "Lisboa-Santa Apolónia"},
                "departureTime": "08:39",
                "arrivalTime": "08:37",
                "platform": 3,
                "delay": 5
            }]"#,
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![ScheduleEntry {
                train_number: "4410".into(),
                service_type: "Intercidades".into(),
                origin: "Porto-Campanhã".into(),
                destination: "Lisboa-Santa Apolónia".into(),
                departure_time: "08:39".into(),
                arrival_time: "08:37".into(),
                platform: "3".into(),
                delay: "5".into(),
            }]
        );
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let entries = parse_schedule("[{}]").unwrap();
        assert_eq!(entries, vec![ScheduleEntry::default()]);

        let entry = &entries[0];
        assert_eq!(entry.delay, "0");
        assert_eq!(entry.platform, "—");
        assert_eq!(entry.train_number, "N/A");
        assert_eq!(entry.origin, "origin unknown");
        assert_eq!(entry.service_type, "type unknown");
    }

    #[test]
    fn null_delay_is_zero() {
        let entries = parse_schedule(r#"[{"trainNumber": "131", "delay": null}]"#).unwrap();
        assert_eq!(entries[0].delay, "0");
        assert_eq!(entries[0].train_number, "131");
    }

    #[test]
    fn null_designation_objects_use_placeholders() {
        let entries = parse_schedule(
            r#"[{"trainOrigin": null, "trainDestination": {"designation": null}}]"#,
        )
        .unwrap();
        assert_eq!(entries[0].origin, "origin unknown");
        assert_eq!(entries[0].destination, "destination unknown");
    }

    #[test]
    fn empty_payloads_mean_no_trains() {
        for body in ["", "  ", "null", "[]", "{}"] {
            assert!(parse_schedule(body).unwrap().is_empty(), "body {body:?}");
        }
    }

    #[test]
    fn non_json_is_format_error() {
        let err = parse_schedule("<html></html>").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
        let ScheduleError::UpstreamFormat { body, .. } = err else {
            panic!("expected a format error");
        };
        assert_eq!(body, "<html></html>");
    }

    #[test]
    fn non_list_is_format_error() {
        let err = parse_schedule(r#"{"error": "maintenance"}"#).unwrap_err();
        assert!(err.to_string().contains("expected a list of trains, got an object"));

        let err = parse_schedule("\"down\"").unwrap_err();
        assert!(err.to_string().contains("got a string"));
    }

    #[test]
    fn malformed_train_reports_index() {
        let body = r#"[{}, {"trainOrigin": "Porto"}]"#;
        let err = parse_schedule(body).unwrap_err();
        assert!(err.to_string().contains("train #1"));
        let ScheduleError::UpstreamFormat { body: snippet, .. } = err else {
            panic!("expected a format error");
        };
        assert_eq!(snippet, body);
    }
}
