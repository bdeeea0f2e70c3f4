//! Budget period windows.
//!
//! Given a reference instant, a client timezone offset, and a period kind,
//! this module answers "which budgeting period is that instant in" as a
//! half-open window in both local-day and UTC coordinates. All entry points
//! are total: offsets clamp, unknown period tags degrade to monthly, and
//! missing anchors take defaults.

pub mod anchor;
mod calc;
pub mod coerce;
pub mod kind;
pub mod local;
pub mod offset;
pub mod window;

pub use anchor::{AnchorConfig, WeekStart};
pub use coerce::parse_instant;
pub use kind::PeriodKind;
pub use local::{local_day, utc_start_of};
pub use offset::{
    clamp_offset_minutes, offset_suffix_minutes, resolve_offset, OffsetHint, UtcOffset,
    MAX_OFFSET_MINUTES, MIN_OFFSET_MINUTES,
};
pub use window::{next_window, period_window, previous_window, trailing_windows, PeriodWindow};
