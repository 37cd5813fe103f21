//! Schedule API response DTOs.
//!
//! Every field is optional: the schedule endpoint omits fields and sends
//! `null` freely. A field of the wrong shape (say, a string where a
//! designation object belongs) fails deserialization of the whole response.

use std::fmt;

use serde::Deserialize;

/// A JSON scalar the endpoint may send for a text-like field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A `{ "designation": ... }` object naming a station or service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Designation {
    pub designation: Option<Scalar>,
}

/// One element of the schedule response array.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrain {
    /// Commercial train number.
    pub train_number: Option<Scalar>,

    /// Service type (Alfa Pendular, Intercidades, Regional, ...).
    pub train_service: Option<Designation>,

    /// Station the train starts from.
    pub train_origin: Option<Designation>,

    /// Station the train terminates at.
    pub train_destination: Option<Designation>,

    /// Departure time at the queried station ("HH:MM").
    pub departure_time: Option<Scalar>,

    /// Arrival time at the queried station ("HH:MM").
    pub arrival_time: Option<Scalar>,

    /// Platform at the queried station.
    pub platform: Option<Scalar>,

    /// Delay in minutes. `null` while the train runs on time.
    pub delay: Option<Scalar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_train() {
        let json = r#"{
            "trainNumber": 4410,
            "trainService": {"code": "IC", "designation": "Intercidades"},
            "trainOrigin": {"code": "94-2006", "designation": "Porto-Campanhã"},
            "trainDestination": {"code": "94-30007", "designation": "Lisboa-Santa Apolónia"},
            "departureTime": "08:39",
            "arrivalTime": "08:37",
            "platform": "3",
            "delay": 5,
            "occupancy": 2
        }"#;

        let train: RawTrain = serde_json::from_str(json).unwrap();
        assert_eq!(train.train_number, Some(Scalar::Integer(4410)));
        assert_eq!(
            train.train_service.unwrap().designation,
            Some(Scalar::Text("Intercidades".into()))
        );
        assert_eq!(train.delay, Some(Scalar::Integer(5)));
    }

    #[test]
    fn nulls_and_missing_fields_are_none() {
        let train: RawTrain =
            serde_json::from_str(r#"{"trainOrigin": null, "delay": null}"#).unwrap();
        assert!(train.train_origin.is_none());
        assert!(train.delay.is_none());
        assert!(train.platform.is_none());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let result = serde_json::from_str::<RawTrain>(r#"{"trainOrigin": "Porto"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Text("3A".into()).to_string(), "3A");
        assert_eq!(Scalar::Integer(12).to_string(), "12");
        assert_eq!(Scalar::Bool(true).to_string(), "true");
    }
}
