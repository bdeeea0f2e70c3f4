use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::PeriodError;

/// Parses a client-supplied date stamp into a UTC instant.
///
/// Accepts RFC 3339 stamps with any offset suffix, offset-less date-times
/// (read as UTC), and bare dates (read as UTC midnight). Anything else is an
/// [`PeriodError::InvalidDate`].
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>, PeriodError> {
    let trimmed = input.trim();
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(DateTime::from_naive_utc_and_offset(
            date.and_time(NaiveTime::MIN),
            Utc,
        ));
    }
    Err(PeriodError::InvalidDate(input.to_string()))
}
