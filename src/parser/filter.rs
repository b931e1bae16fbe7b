use std::sync::LazyLock;

use regex::Regex;

use crate::model::Event;

/// Terms marking a line as a Mass or Eucharist. Matched case-insensitively as
/// whole words; a space inside a term matches any (or no) whitespace.
///
/// Closed list: compounds are not suffix-matched (that would admit "Buchmesse"),
/// so a new kind of Mass needs its own entry here.
pub const LITURGICAL_KEYWORDS: &[&str] = &[
    "Hl. Messe",
    "Messe",
    "Messen",
    "Vorabendmesse",
    "Sonntagsmesse",
    "Festmesse",
    "Familienmesse",
    "Abendmesse",
    "Frühmesse",
    "Jugendmesse",
    "Kindermesse",
    "Schülermesse",
    "Seniorenmesse",
    "Eucharistiefeier",
];

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = LITURGICAL_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw).replace(' ', r"\s*"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternatives})\b")).unwrap()
});

pub fn has_liturgical_keyword(text: &str) -> bool {
    KEYWORD_RE.is_match(text)
}

/// Append-only event sink; `finish` hands back events ordered by start.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stable: events with equal start keep their scan order.
    pub fn finish(mut self) -> Vec<Event> {
        self.events.sort_by_key(|e| e.start);
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn event(title: &str, hour: u32, minute: u32) -> Event {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        Event {
            title: title.to_string(),
            start: tz.with_ymd_and_hms(2025, 9, 13, hour, minute, 0).unwrap(),
            location: None,
            kanton: "SO".into(),
            source: "kirchenblatt".into(),
        }
    }

    #[test]
    fn keywords_match_case_insensitively() {
        assert!(has_liturgical_keyword("Hl. Messe"));
        assert!(has_liturgical_keyword("hl.messe"));
        assert!(has_liturgical_keyword("MESSE mit Chor"));
        assert!(has_liturgical_keyword("Vorabendmesse"));
        assert!(has_liturgical_keyword("eucharistiefeier im Altersheim"));
    }

    #[test]
    fn common_compounds_and_plural() {
        assert!(has_liturgical_keyword("Jugendmesse mit Band"));
        assert!(has_liturgical_keyword("Seniorenmesse"));
        assert!(has_liturgical_keyword("Schülermesse der 5. Klasse"));
        assert!(has_liturgical_keyword("Keine Messen während der Ferien"));
    }

    #[test]
    fn non_liturgical_lines_rejected() {
        assert!(!has_liturgical_keyword("Konzert Kathedrale St. Urs"));
        assert!(!has_liturgical_keyword("Buchmesse Frankfurt"));
        assert!(!has_liturgical_keyword("Messebesuch"));
        assert!(!has_liturgical_keyword(""));
    }

    #[test]
    fn collector_sorts_stably() {
        let mut c = EventCollector::new();
        assert!(c.is_empty());
        c.push(event("Abend", 18, 30));
        c.push(event("Erste", 9, 0));
        c.push(event("Zweite", 9, 0));
        assert_eq!(c.len(), 3);

        let titles: Vec<String> = c.finish().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Erste", "Zweite", "Abend"]);
    }
}
