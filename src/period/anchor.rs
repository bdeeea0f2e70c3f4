use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The weekday a weekly budget cycle begins on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    #[serde(rename = "mon")]
    Monday,
    #[serde(rename = "sun")]
    Sunday,
}

impl WeekStart {
    /// Days elapsed since the most recent cycle start for `weekday`.
    pub(crate) fn days_from_start(&self, weekday: Weekday) -> i64 {
        let days = match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        };
        days as i64
    }
}

/// Anchoring preferences for the calendar-based period kinds.
///
/// `anchor_day` is the day-of-month monthly and longer cycles begin on; in
/// months too short to hold it, the cycle begins on the month's last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorConfig {
    #[serde(default)]
    pub week_start: WeekStart,
    #[serde(default = "AnchorConfig::default_anchor_day")]
    pub anchor_day: u32,
}

impl AnchorConfig {
    fn default_anchor_day() -> u32 {
        1
    }
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Monday,
            anchor_day: Self::default_anchor_day(),
        }
    }
}

/// Number of days in the given month, leap years included.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}

/// Steps `delta` months from a year/month pair, normalizing overflow.
pub(crate) fn step_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let mut year = year;
    let mut month = month as i32 + delta;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    (year, month as u32)
}

/// The anchor date within a month, clamped to the month's length.
pub(crate) fn month_anchor(year: i32, month: u32, anchor_day: u32) -> Option<NaiveDate> {
    let day = anchor_day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}
