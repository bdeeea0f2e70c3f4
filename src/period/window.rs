use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::period::anchor::AnchorConfig;
use crate::period::calc;
use crate::period::kind::PeriodKind;
use crate::period::local::{local_day, utc_start_of};
use crate::period::offset::UtcOffset;

/// The budget period containing a reference instant.
///
/// Bounds are half-open: an instant belongs to the window when
/// `start <= instant < end`. Local bounds are calendar days at the client's
/// offset; UTC bounds are the same boundaries as instants, suitable for
/// range queries over stored transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start_local: NaiveDate,
    pub end_local: NaiveDate,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
}

impl PeriodWindow {
    /// Whether an instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_utc <= instant && instant < self.end_utc
    }

    /// Whether a local calendar day falls inside the window.
    pub fn contains_local(&self, day: NaiveDate) -> bool {
        self.start_local <= day && day < self.end_local
    }
}

/// Computes the period window containing `reference`.
///
/// Total over its inputs: the offset clamps to the supported range, absent
/// anchors take the defaults (Monday weeks, day 1 of the month), and the
/// calendar arithmetic degrades rather than fails at the representable
/// extremes.
pub fn period_window(
    kind: PeriodKind,
    reference: DateTime<Utc>,
    offset_minutes: i32,
    anchors: Option<AnchorConfig>,
) -> PeriodWindow {
    let offset = UtcOffset::from_minutes(offset_minutes);
    let anchors = anchors.unwrap_or_default();
    let day = local_day(reference, offset);
    let (start_local, end_local) = match kind {
        PeriodKind::Daily => calc::daily_bounds(day),
        PeriodKind::Weekly => calc::weekly_bounds(day, anchors.week_start),
        PeriodKind::Monthly => calc::monthly_bounds(day, anchors.anchor_day),
        PeriodKind::HalfYearly => calc::half_yearly_bounds(day, anchors.anchor_day),
        PeriodKind::Yearly => calc::yearly_bounds(day, anchors.anchor_day),
    };
    PeriodWindow {
        start_local,
        end_local,
        start_utc: utc_start_of(start_local, offset),
        end_utc: utc_start_of(end_local, offset),
    }
}

/// The window immediately after `window`.
///
/// The end boundary is the next cycle's first instant, so evaluating the
/// window at that boundary steps forward by exactly one period.
pub fn next_window(
    kind: PeriodKind,
    window: &PeriodWindow,
    offset_minutes: i32,
    anchors: Option<AnchorConfig>,
) -> PeriodWindow {
    period_window(kind, window.end_utc, offset_minutes, anchors)
}

/// The window immediately before `window`.
pub fn previous_window(
    kind: PeriodKind,
    window: &PeriodWindow,
    offset_minutes: i32,
    anchors: Option<AnchorConfig>,
) -> PeriodWindow {
    let offset = UtcOffset::from_minutes(offset_minutes);
    let before = window.start_local.pred_opt().unwrap_or(window.start_local);
    period_window(kind, utc_start_of(before, offset), offset_minutes, anchors)
}

/// The last `count` windows ending with the one containing `reference`,
/// oldest first.
///
/// Used for spending-history views. Stops early if the calendar cannot step
/// further back, so the result may be shorter than `count` near the
/// representable minimum.
pub fn trailing_windows(
    kind: PeriodKind,
    reference: DateTime<Utc>,
    offset_minutes: i32,
    anchors: Option<AnchorConfig>,
    count: usize,
) -> Vec<PeriodWindow> {
    // The preallocation must not scale with the raw count; the walk below
    // stops at the calendar floor regardless of how much was asked for.
    let mut windows = Vec::with_capacity(count.min(64));
    if count == 0 {
        return windows;
    }
    let mut current = period_window(kind, reference, offset_minutes, anchors);
    windows.push(current);
    while windows.len() < count {
        let earlier = previous_window(kind, &current, offset_minutes, anchors);
        if earlier.start_local >= current.start_local {
            break;
        }
        windows.push(earlier);
        current = earlier;
    }
    windows.reverse();
    windows
}
