//! Order timestamps in the bakery's fixed local timezone.
//!
//! Timestamps are stored as plain strings because the persisted format is an
//! external contract (`YYYY-MM-DD HH:MM:SS`); the format is lexicographically
//! ordered, so string comparison matches chronological comparison.

use chrono::Utc;
use chrono_tz::Asia::Kolkata;

/// Wire/display format for order timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current time in the bakery's timezone, formatted for storage.
pub fn now_stamp() -> String {
    Utc::now()
        .with_timezone(&Kolkata)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
