//! Custom askama filters shared by the page templates.

use hydroview_domain::time::format_unix;

/// Render an optional unix-seconds timestamp (`"Never"` when absent).
pub fn timestamp(ts: &Option<i64>) -> askama::Result<String> {
    Ok(format_unix(*ts))
}
