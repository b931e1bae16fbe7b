use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::SkipReason;

/// One announced service, as written to the JSON feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// ISO-8601 with the zone's UTC offset, e.g. `2025-09-13T18:30:00+02:00`.
    pub start: DateTime<FixedOffset>,
    pub location: Option<String>,
    pub kanton: String,
    pub source: String,
}

/// What happened to one non-blank line of the bulletin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number in the normalized text.
    pub line_no: usize,
    pub line: String,
    pub result: Result<Event, SkipReason>,
}

impl LineOutcome {
    pub fn is_schedule_line(&self) -> bool {
        !matches!(self.result, Err(SkipReason::NoLineMatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Event {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        Event {
            title: "Vorabendmesse".into(),
            start: tz.with_ymd_and_hms(2025, 9, 13, 18, 30, 0).unwrap(),
            location: Some("Kathedrale St. Ursen, Solothurn".into()),
            kanton: "SO".into(),
            source: "kirchenblatt".into(),
        }
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["title"], "Vorabendmesse");
        assert_eq!(json["start"], "2025-09-13T18:30:00+02:00");
        assert_eq!(json["location"], "Kathedrale St. Ursen, Solothurn");
        assert_eq!(json["kanton"], "SO");
        assert_eq!(json["source"], "kirchenblatt");
    }

    #[test]
    fn absent_location_is_null() {
        let mut e = sample();
        e.location = None;
        let json = serde_json::to_value(&e).unwrap();
        assert!(json["location"].is_null());
    }

    #[test]
    fn survives_json_round_trip() {
        let e = sample();
        let text = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&text).unwrap();
        assert_eq!(back, e);
    }
}
