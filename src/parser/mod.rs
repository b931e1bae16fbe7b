pub mod dates;
pub mod filter;
pub mod lines;
pub mod place;
pub mod text;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, info, trace};

use crate::error::SkipReason;
use crate::model::{Event, LineOutcome};
use dates::DayWindow;
use filter::EventCollector;

/// Everything the pipeline needs besides the text itself.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub tz: Tz,
    /// Target day; only services starting on it are kept.
    pub day: NaiveDate,
    /// Reference instant, used only when the bulletin names no year.
    pub now: DateTime<Tz>,
    pub kanton: String,
    pub source: String,
}

/// Pipeline: normalize → recognize → date → window → split → keyword → place.
pub fn extract_events(raw: &str, opts: &ExtractOptions) -> Vec<Event> {
    let outcomes = scan_lines(raw, opts);
    let scanned = outcomes.len();
    let mut recognized = 0usize;
    let mut collector = EventCollector::new();

    for outcome in outcomes {
        if outcome.is_schedule_line() {
            recognized += 1;
        }
        match outcome.result {
            Ok(event) => collector.push(event),
            Err(SkipReason::NoLineMatch) => {}
            Err(reason) => debug!(line_no = outcome.line_no, line = %outcome.line, %reason, "skipped"),
        }
    }

    info!(
        "{} lines scanned, {} schedule lines, {} events for {}",
        scanned,
        recognized,
        collector.len(),
        opts.day
    );
    collector.finish()
}

/// Per-line outcomes for every non-blank line, in document order.
pub fn scan_lines(raw: &str, opts: &ExtractOptions) -> Vec<LineOutcome> {
    let text = text::normalize(raw);
    let year_hint = dates::year_hint(&text, &opts.now);
    let window = DayWindow::for_day(opts.day, &opts.tz);
    info!("Year hint: {}", year_hint);

    text.lines()
        .enumerate()
        .filter_map(|(i, raw_line)| {
            let line = raw_line.trim();
            if line.is_empty() {
                return None;
            }
            let result = process_line(line, year_hint, &window, opts);
            if let Ok(ref e) = result {
                trace!(line_no = i + 1, title = %e.title, start = %e.start, "accepted");
            }
            Some(LineOutcome {
                line_no: i + 1,
                line: line.to_string(),
                result,
            })
        })
        .collect()
}

fn process_line(
    line: &str,
    year_hint: i32,
    window: &DayWindow,
    opts: &ExtractOptions,
) -> Result<Event, SkipReason> {
    let frags = lines::recognize(line).ok_or(SkipReason::NoLineMatch)?;

    let date = dates::resolve_date(
        frags.day,
        frags.month,
        frags.month_name,
        frags.year,
        year_hint,
    )?;
    let start = dates::resolve_start(date, frags.hour, frags.minute, &opts.tz)?;
    if !window.contains(&start) {
        return Err(SkipReason::OutOfWindow);
    }

    let (title, place) = place::split_title_place(frags.body);
    if !(filter::has_liturgical_keyword(title) || filter::has_liturgical_keyword(frags.body)) {
        return Err(SkipReason::NoKeywordMatch);
    }

    let title = if title.is_empty() { place::DEFAULT_TITLE } else { title };
    Ok(Event {
        title: title.to_string(),
        start: start.fixed_offset(),
        location: place::normalize_place(place),
        kanton: opts.kanton.clone(),
        source: opts.source.clone(),
    })
}
