//! Normalized schedule entries.

use std::fmt;

/// One train calling at the queried station, ready for display.
///
/// Every field is plain text. Fields the upstream payload leaves out are
/// filled with a fixed placeholder (see the `UNKNOWN_*` constants), so an
/// entry can always be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub train_number: String,
    pub service_type: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub platform: String,
    pub delay: String,
}

impl ScheduleEntry {
    pub const UNKNOWN_TRAIN_NUMBER: &'static str = "N/A";
    pub const UNKNOWN_SERVICE_TYPE: &'static str = "type unknown";
    pub const UNKNOWN_ORIGIN: &'static str = "origin unknown";
    pub const UNKNOWN_DESTINATION: &'static str = "destination unknown";
    pub const UNKNOWN_TIME: &'static str = "??:??";
    pub const UNKNOWN_PLATFORM: &'static str = "—";
    pub const NO_DELAY: &'static str = "0";
}

impl Default for ScheduleEntry {
    fn default() -> Self {
        Self {
            train_number: Self::UNKNOWN_TRAIN_NUMBER.to_string(),
            service_type: Self::UNKNOWN_SERVICE_TYPE.to_string(),
            origin: Self::UNKNOWN_ORIGIN.to_string(),
            destination: Self::UNKNOWN_DESTINATION.to_string(),
            departure_time: Self::UNKNOWN_TIME.to_string(),
            arrival_time: Self::UNKNOWN_TIME.to_string(),
            platform: Self::UNKNOWN_PLATFORM.to_string(),
            delay: Self::NO_DELAY.to_string(),
        }
    }
}

/// Renders the three-line block shown to the agent.
impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Train {} ({})", self.train_number, self.service_type)?;
        writeln!(f, "From: {} → To: {}", self.origin, self.destination)?;
        write!(
            f,
            "Departure: {} — arrival: {} | platform: {} | delay: {}",
            self.departure_time, self.arrival_time, self.platform, self.delay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_placeholders() {
        let entry = ScheduleEntry::default();
        assert_eq!(entry.train_number, "N/A");
        assert_eq!(entry.departure_time, "??:??");
        assert_eq!(entry.arrival_time, "??:??");
        assert_eq!(entry.platform, "—");
        assert_eq!(entry.delay, "0");
    }

    #[test]
    fn display_block() {
        let entry = ScheduleEntry {
            train_number: "4410".into(),
            service_type: "Intercidades".into(),
            origin: "Porto-Campanhã".into(),
            destination: "Lisboa-Santa Apolónia".into(),
            departure_time: "08:39".into(),
            arrival_time: "08:37".into(),
            platform: "3".into(),
            delay: "5".into(),
        };

        assert_eq!(
            entry.to_string(),
            "Train 4410 (Intercidades)\n\
             From: Porto-Campanhã → To: Lisboa-Santa Apolónia\n\
             Departure: 08:39 — arrival: 08:37 | platform: 3 | delay: 5"
        );
    }
}
