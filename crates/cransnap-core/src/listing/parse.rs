//! Reduce raw listing lines to the snapshot dates they contain.

use std::sync::OnceLock;

use regex::Regex;

static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn date_pattern() -> &'static Regex {
    DATE_PATTERN.get_or_init(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("static date pattern"))
}

/// Extracts the first `YYYY-MM-DD` substring from each line.
///
/// Handles both HTML directory-index rows (markup around the date is
/// discarded) and plain filesystem entry names. Lines without a date are
/// dropped. Order is preserved as given; no sorting, no deduplication.
pub(crate) fn extract_dates<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            date_pattern()
                .find(line.as_ref())
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
