//! Error taxonomy for snapshot operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Terminal failures surfaced by the snapshot utilities.
///
/// Every variant aborts the enclosing operation; nothing is retried or
/// recovered internally. Derives `PartialEq` so callers and tests can match
/// on the exact kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// Date string did not parse as `YYYY-MM-DD`.
    #[error("invalid snapshot date {0:?}: expected YYYY-MM-DD")]
    InvalidFormat(String),
    /// Date parses but predates the first published snapshot.
    #[error("snapshot date {0} is earlier than the first available snapshot (2014-09-17)")]
    TooEarly(NaiveDate),
    /// Date parses but lies in the future.
    #[error("snapshot date {0} is in the future")]
    FutureDate(NaiveDate),
    /// Date is absent from the server's snapshot listing.
    #[error("snapshot {0} not found in the server listing")]
    NotFound(String),
    /// URL scheme is not one of http, https, or file.
    #[error("unsupported URL scheme in {0:?}: expected http://, https://, or file://")]
    UnsupportedScheme(String),
    /// The snapshot listing could not be fetched or read.
    #[error("snapshot listing at {url} is unreachable: {reason}")]
    HostUnreachable { url: String, reason: String },
}
