#![doc(test(attr(deny(warnings))))]

//! Budget Periods computes the anchored period windows (daily through yearly)
//! that budgeting workflows track spending against, with explicit handling of
//! client timezone offsets.

pub mod errors;
pub mod period;
pub mod utils;

pub use errors::PeriodError;
pub use period::{
    next_window, parse_instant, period_window, previous_window, resolve_offset, trailing_windows,
    AnchorConfig, OffsetHint, PeriodKind, PeriodWindow, UtcOffset, WeekStart,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Periods tracing initialized.");
    });
}
