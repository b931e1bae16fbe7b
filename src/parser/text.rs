use std::sync::LazyLock;

use regex::Regex;

static HYPHEN_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\n").unwrap());
static HSPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").unwrap());

const SOFT_HYPHEN: char = '\u{00AD}';

/// Clean up extracted bulletin text before line scanning.
///
/// Order matters: soft hyphens go first so that `Got\u{ad}-\ntes` style breaks
/// still join, then hyphenated wraps are rejoined, then horizontal whitespace is
/// collapsed. Line breaks survive except where a word was hyphen-wrapped.
pub fn normalize(raw: &str) -> String {
    let text = raw
        .replace("\r\n", "\n")
        .replace(['\r', '\u{000C}'], "\n")
        .replace(SOFT_HYPHEN, "");
    let text = HYPHEN_BREAK_RE.replace_all(&text, "");
    HSPACE_RE.replace_all(&text, " ").into_owned()
}
