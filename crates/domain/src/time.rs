//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used wherever the frontend needs a wall-clock value.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a unix-seconds timestamp the way the pages display it.
///
/// `None` and `0` render as `"Never"`; values outside the representable
/// range fall back to the raw number.
#[must_use]
pub fn format_unix(ts: Option<i64>) -> String {
    match ts {
        None | Some(0) => "Never".to_string(),
        Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0).map_or_else(
            || secs.to_string(),
            |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
    }
}
