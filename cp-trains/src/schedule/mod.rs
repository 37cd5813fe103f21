//! CP station schedule client.
//!
//! The schedule endpoint (`/sites/spring/station/trains`) takes a
//! normalized station id and returns the trains calling at that station
//! as a JSON array. The payload is loosely structured:
//! - any field may be missing, and nested designation objects may be `null`
//! - numbers and strings are used interchangeably for train numbers,
//!   platforms and delays
//! - a station with no trains answers with an empty body, `null` or `[]`
//!
//! Responses are parsed into [`RawTrain`] DTOs up front and then converted
//! into display-ready [`ScheduleEntry`](crate::domain::ScheduleEntry) values.

mod client;
mod convert;
mod error;
mod types;

pub use client::{ScheduleClient, ScheduleClientConfig};
pub use convert::parse_schedule;
pub use error::ScheduleError;
pub use types::{Designation, RawTrain, Scalar};
