//! Snapshot date validation.
//!
//! Format and range checks are pure; the optional existence check against
//! the live listing is the only step that touches the network.

use chrono::{NaiveDate, Utc};

use crate::error::SnapshotError;
use crate::listing::list_snapshots;

/// Earliest date the public snapshot archive covers (inclusive).
pub fn first_snapshot() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 9, 17).expect("2014-09-17 is representable")
}

/// Validates a snapshot date string.
///
/// Checks that `date` parses as `YYYY-MM-DD`, falls on or after
/// [`first_snapshot`], and is not in the future. With `verify` set, also
/// fetches the snapshot listing at `base_url` and requires the exact date
/// string to appear in it. The string itself is never rewritten; the parsed
/// date is returned for callers that need it.
pub fn validate_snapshot_date(
    date: &str,
    verify: bool,
    base_url: &str,
) -> Result<NaiveDate, SnapshotError> {
    let parsed = check_range(date, Utc::now().date_naive())?;
    if verify {
        let available = list_snapshots(base_url)?;
        if !available.iter().any(|d| d == date) {
            return Err(SnapshotError::NotFound(date.to_string()));
        }
    }
    Ok(parsed)
}

/// Format and range checks against an explicit `today` (UTC in production).
pub(crate) fn check_range(date: &str, today: NaiveDate) -> Result<NaiveDate, SnapshotError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| SnapshotError::InvalidFormat(date.to_string()))?;
    if parsed < first_snapshot() {
        return Err(SnapshotError::TooEarly(parsed));
    }
    if parsed > today {
        return Err(SnapshotError::FutureDate(parsed));
    }
    Ok(parsed)
}
