use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Event title used when nothing descriptive precedes the location.
pub const DEFAULT_TITLE: &str = "Messe";

static PLACE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Kathedrale|Kirche|Kapelle|St\.\s[\w.\- ]+").unwrap());

/// One venue rewrite: anything matching `pattern` (plus an immediately following
/// `, <town>`) becomes `"<venue>, <town>"`.
#[derive(Debug, Clone, Copy)]
pub struct PlaceRule {
    pub pattern: &'static str,
    pub venue: &'static str,
    pub town: &'static str,
}

/// Applied top to bottom, each rule against the output of the previous one.
pub const PLACE_RULES: &[PlaceRule] = &[
    PlaceRule {
        pattern: r"\bKathedrale\s*St\.?\s*Urs(?:en)?\b",
        venue: "Kathedrale St. Ursen",
        town: "Solothurn",
    },
    PlaceRule {
        pattern: r"\bSt\.?\s*Marien\b",
        venue: "St. Marien",
        town: "Solothurn",
    },
    PlaceRule {
        pattern: r"\bSt\.?\s*Niklaus\b",
        venue: "St. Niklaus",
        town: "Solothurn",
    },
    PlaceRule {
        pattern: r"\bSt\.?\s*Eusebius\b",
        venue: "St. Eusebius",
        town: "Grenchen",
    },
    PlaceRule {
        pattern: r"\bSt\.?\s*Klem(?:e)?nz\b",
        venue: "St. Klemenz",
        town: "Bettlach",
    },
];

static COMPILED_RULES: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    PLACE_RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(&format!(
                r"(?i){}(?:\s*,\s*{}\b)?",
                rule.pattern,
                regex::escape(rule.town)
            ))
            .unwrap();
            (re, format!("{}, {}", rule.venue, rule.town))
        })
        .collect()
});

/// Split a line body into `(title, location)` at the first venue word.
///
/// The title may come back empty when the body starts with the venue; the
/// caller decides on a fallback.
pub fn split_title_place(body: &str) -> (&str, Option<&str>) {
    let Some(m) = PLACE_START_RE.find(body) else {
        return (body.trim(), None);
    };

    let place = body[m.start()..].trim_matches(|c: char| c == ')' || c.is_whitespace());
    let title = body[..m.start()].trim_matches(|c: char| matches!(c, '-' | '–' | ',') || c.is_whitespace());

    (title, Some(place).filter(|p| !p.is_empty()))
}

/// Rewrite a location to its canonical "Venue, Town" form where a rule knows it.
pub fn normalize_place(place: Option<&str>) -> Option<String> {
    let place = place?;
    let mut out = place.to_string();
    for (re, canonical) in COMPILED_RULES.iter() {
        out = re.replace_all(&out, NoExpand(canonical)).into_owned();
    }
    Some(out)
}
