use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::period::offset::UtcOffset;

/// Projects an instant to the calendar day it falls on at the given offset.
///
/// Near the chrono representable extremes the shift can overflow; the
/// projection then degrades to the unshifted instant rather than failing.
pub fn local_day(instant: DateTime<Utc>, offset: UtcOffset) -> NaiveDate {
    instant
        .checked_add_signed(offset.to_duration())
        .unwrap_or(instant)
        .date_naive()
}

/// The UTC instant at which `day` begins for a clock at the given offset.
///
/// Inverse of [`local_day`] at day boundaries: local midnight shifted back
/// to UTC. An offset east of UTC yields a UTC instant before local midnight.
pub fn utc_start_of(day: NaiveDate, offset: UtcOffset) -> DateTime<Utc> {
    let midnight = DateTime::from_naive_utc_and_offset(day.and_time(NaiveTime::MIN), Utc);
    midnight
        .checked_sub_signed(offset.to_duration())
        .unwrap_or(midnight)
}
