//! Schedule-line grammar: `<weekday> <date> <time> <body>`.
//!
//! Examples the grammar accepts:
//! `Sa 13.09.2025 18.30 Vorabendmesse`, `So 14. Sept. 10:00 Uhr Hl. Messe`,
//! `Donnerstag 18 September 9.00 Eucharistiefeier, Kapelle`.

use std::sync::LazyLock;

use regex::Regex;

/// Weekday tokens, abbreviated and full. Matched case-sensitively.
pub const WEEKDAYS: &[&str] = &[
    "Mo", "Di", "Mi", "Do", "Fr", "Sa", "So",
    "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
];

const DATE_PATTERN: &str = r"(?P<d>[0-9]{1,2})(?:[.\s](?P<mon>[0-9]{1,2})\.|\.?\s*(?P<mon_name>[A-Za-zÄÖÜäöü]+)\.?)\s*(?P<y>[0-9]{4})?";
const TIME_PATTERN: &str = r"(?P<h>[0-9]{1,2})[.:](?P<m>[0-9]{2})(?:\s*Uhr)?";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Longest tokens first so "Montag" is never read as "Mo" + garbage.
    let mut weekdays: Vec<&str> = WEEKDAYS.to_vec();
    weekdays.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let weekdays = weekdays
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"\b(?P<wd>{weekdays})\.?,?\s+{DATE_PATTERN}\s+{TIME_PATTERN}\s+(?P<body>.+)$"
    ))
    .unwrap()
});

/// The pieces of one schedule line, borrowed from the line itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedFragments<'a> {
    pub weekday: &'a str,
    pub day: u32,
    pub month: Option<u32>,
    pub month_name: Option<&'a str>,
    pub year: Option<i32>,
    pub hour: u32,
    pub minute: u32,
    pub body: &'a str,
}

/// Match a normalized line against the schedule grammar.
///
/// `None` means "not a schedule line"; callers skip it.
pub fn recognize(line: &str) -> Option<RecognizedFragments<'_>> {
    let caps = LINE_RE.captures(line)?;

    Some(RecognizedFragments {
        weekday: caps.name("wd")?.as_str(),
        day: caps.name("d")?.as_str().parse().ok()?,
        month: caps.name("mon").and_then(|m| m.as_str().parse().ok()),
        month_name: caps.name("mon_name").map(|m| m.as_str()),
        year: caps.name("y").and_then(|m| m.as_str().parse().ok()),
        hour: caps.name("h")?.as_str().parse().ok()?,
        minute: caps.name("m")?.as_str().parse().ok()?,
        body: caps.name("body")?.as_str().trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_date_with_year() {
        let f = recognize("Sa 13.09.2025 18.30 Vorabendmesse Kathedrale St. Urs, Solothurn").unwrap();
        assert_eq!(f.weekday, "Sa");
        assert_eq!((f.day, f.month, f.year), (13, Some(9), Some(2025)));
        assert_eq!(f.month_name, None);
        assert_eq!((f.hour, f.minute), (18, 30));
        assert_eq!(f.body, "Vorabendmesse Kathedrale St. Urs, Solothurn");
    }

    #[test]
    fn numeric_date_without_year() {
        let f = recognize("So 14.09. 10:00 Hl. Messe").unwrap();
        assert_eq!((f.day, f.month, f.year), (14, Some(9), None));
        assert_eq!((f.hour, f.minute), (10, 0));
        assert_eq!(f.body, "Hl. Messe");
    }

    #[test]
    fn month_name_variants() {
        let f = recognize("Donnerstag 18 September 9.00 Eucharistiefeier").unwrap();
        assert_eq!(f.weekday, "Donnerstag");
        assert_eq!(f.month_name, Some("September"));
        assert_eq!(f.month, None);
        assert_eq!((f.hour, f.minute), (9, 0));

        let f = recognize("So 14. Sept. 2025 10.30 Uhr Messe").unwrap();
        assert_eq!(f.month_name, Some("Sept"));
        assert_eq!(f.year, Some(2025));
        assert_eq!(f.body, "Messe");
    }

    #[test]
    fn full_weekday_is_not_split() {
        let f = recognize("Montag, 15.09. 8.00 Messe").unwrap();
        assert_eq!(f.weekday, "Montag");
        assert_eq!(f.day, 15);
    }

    #[test]
    fn leading_marker_tolerated() {
        let f = recognize("• Fr 19.09. 19.00 Messe").unwrap();
        assert_eq!(f.weekday, "Fr");
    }

    #[test]
    fn weekday_is_case_sensitive() {
        assert!(recognize("sa 13.09. 18.30 Messe").is_none());
    }

    #[test]
    fn non_schedule_lines() {
        assert!(recognize("Pfarrei St. Ursen Solothurn").is_none());
        assert!(recognize("Sa 13.09. Messe").is_none());
        assert!(recognize("Sa 13.09. 18.30").is_none());
        assert!(recognize("").is_none());
    }
}
