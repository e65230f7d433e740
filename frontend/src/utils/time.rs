use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp the way `Date.prototype.toISOString` does:
/// UTC, millisecond precision, `Z` suffix.
pub fn to_iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
