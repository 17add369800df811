use time::{Date, OffsetDateTime};

/// Current calendar date in server-local time; UTC when the local offset
/// cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
