//! Date and time resolution for recognized schedule lines.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use regex::Regex;

use crate::error::SkipReason;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(20[0-9]{2})\b").unwrap());

/// German month names and abbreviations, lowercased.
pub const MONTHS: &[(&str, u32)] = &[
    ("januar", 1),
    ("jänner", 1),
    ("jan", 1),
    ("februar", 2),
    ("feb", 2),
    ("märz", 3),
    ("maerz", 3),
    ("marz", 3),
    ("mär", 3),
    ("mrz", 3),
    ("april", 4),
    ("apr", 4),
    ("mai", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("dezember", 12),
    ("dez", 12),
];

/// First `20xx` token in the document, or the year of `now` when there is none.
pub fn year_hint(text: &str, now: &DateTime<Tz>) -> i32 {
    YEAR_RE
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or_else(|| now.year())
}

pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_lowercase();
    MONTHS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, m)| *m)
}

/// Build a calendar date from line fragments.
///
/// A month name wins over a numeric month; a missing year falls back to `year_hint`.
pub fn resolve_date(
    day: u32,
    month: Option<u32>,
    month_name: Option<&str>,
    year: Option<i32>,
    year_hint: i32,
) -> Result<NaiveDate, SkipReason> {
    let month = match month_name {
        Some(name) => month_from_name(name)
            .ok_or_else(|| SkipReason::UnresolvableDate(format!("unknown month '{name}'")))?,
        None => month.ok_or_else(|| SkipReason::UnresolvableDate("missing month".into()))?,
    };
    let year = year.unwrap_or(year_hint);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SkipReason::UnresolvableDate(format!("{day:02}.{month:02}.{year} is not a calendar date"))
    })
}

/// Read `hour:minute` as wall-clock time in `tz` on `date`.
///
/// Times inside a spring-forward gap do not exist and are rejected; times in the
/// autumn fold take the earlier instant.
pub fn resolve_start(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    tz: &Tz,
) -> Result<DateTime<Tz>, SkipReason> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        SkipReason::UnresolvableDate(format!("{hour:02}:{minute:02} is not a time of day"))
    })?;

    match tz.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(SkipReason::UnresolvableDate(format!(
            "{date} {hour:02}:{minute:02} does not exist in {tz}"
        ))),
    }
}

/// Inclusive window from local midnight to 23:59:59 of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl DayWindow {
    pub fn for_day(day: NaiveDate, tz: &Tz) -> Self {
        let local = |h, m, s| {
            let naive = day.and_time(NaiveTime::from_hms_opt(h, m, s).unwrap_or_default());
            match tz.from_local_datetime(&naive) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
                // No zone in use shifts clocks across midnight; fall back to UTC reading.
                LocalResult::None => tz.from_utc_datetime(&naive),
            }
        };
        DayWindow {
            start: local(0, 0, 0),
            end: local(23, 59, 59),
        }
    }

    pub fn contains(&self, when: &DateTime<Tz>) -> bool {
        self.start <= *when && *when <= self.end
    }
}
