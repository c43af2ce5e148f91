use chrono::NaiveDateTime;

/// Server "now" used by every time comparison.
///
/// Timestamps are stored timezone-naive; UTC keeps comparisons monotonic
/// across DST boundaries.
pub fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
