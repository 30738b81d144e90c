//! Canonical snapshot URL assembly.

/// Builds the snapshot URL for `base_url`, optionally pinned to a date.
///
/// Pure string assembly: trailing slashes are stripped from the base,
/// `/snapshot` is appended, and `/<date>` follows when a date is given.
/// No validation of either argument happens here.
///
/// # Examples
///
/// - `snapshot_url("https://mran.microsoft.com/", Some("2020-01-01"))` →
///   `"https://mran.microsoft.com/snapshot/2020-01-01"`
/// - `snapshot_url("https://mran.microsoft.com", None)` →
///   `"https://mran.microsoft.com/snapshot"`
pub fn snapshot_url(base_url: &str, date: Option<&str>) -> String {
    let base = base_url.trim_end_matches('/');
    match date {
        Some(date) => format!("{base}/snapshot/{date}"),
        None => format!("{base}/snapshot"),
    }
}
