use chrono::{Datelike, Duration, NaiveDate};

use crate::period::anchor::{month_anchor, step_month, WeekStart};

// Every calculator here shares one tie-break: when the local day falls before
// its unit's anchor date, the running cycle began in the previous unit. All
// bounds are half-open, start inclusive and end exclusive. At the edges of
// chrono's representable range the arithmetic degrades to the input day
// instead of failing.

pub(crate) fn daily_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    (day, day.succ_opt().unwrap_or(day))
}

pub(crate) fn weekly_bounds(day: NaiveDate, week_start: WeekStart) -> (NaiveDate, NaiveDate) {
    let back = Duration::days(week_start.days_from_start(day.weekday()));
    let start = day.checked_sub_signed(back).unwrap_or(day);
    let end = start.checked_add_signed(Duration::days(7)).unwrap_or(start);
    (start, end)
}

pub(crate) fn monthly_bounds(day: NaiveDate, anchor_day: u32) -> (NaiveDate, NaiveDate) {
    let candidate = month_anchor(day.year(), day.month(), anchor_day).unwrap_or(day);
    let start = if day >= candidate {
        candidate
    } else {
        let (year, month) = step_month(day.year(), day.month(), -1);
        month_anchor(year, month, anchor_day).unwrap_or(day)
    };
    let (end_year, end_month) = step_month(start.year(), start.month(), 1);
    let end = month_anchor(end_year, end_month, anchor_day).unwrap_or(start);
    (start, end)
}

pub(crate) fn half_yearly_bounds(day: NaiveDate, anchor_day: u32) -> (NaiveDate, NaiveDate) {
    // Halves nominally begin in January and July.
    let half_month = if day.month() >= 7 { 7 } else { 1 };
    let candidate = month_anchor(day.year(), half_month, anchor_day).unwrap_or(day);
    let start = if day >= candidate {
        candidate
    } else {
        let (year, month) = step_month(day.year(), half_month, -6);
        month_anchor(year, month, anchor_day).unwrap_or(day)
    };
    let (end_year, end_month) = step_month(start.year(), start.month(), 6);
    let end = month_anchor(end_year, end_month, anchor_day).unwrap_or(start);
    (start, end)
}

pub(crate) fn yearly_bounds(day: NaiveDate, anchor_day: u32) -> (NaiveDate, NaiveDate) {
    let candidate = month_anchor(day.year(), 1, anchor_day).unwrap_or(day);
    let start = if day >= candidate {
        candidate
    } else {
        month_anchor(day.year() - 1, 1, anchor_day).unwrap_or(day)
    };
    let end = month_anchor(start.year() + 1, 1, anchor_day).unwrap_or(start);
    (start, end)
}
