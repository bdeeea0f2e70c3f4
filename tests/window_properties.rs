use budget_periods::period::{clamp_offset_minutes, local_day, utc_start_of};
use budget_periods::{
    period_window, resolve_offset, AnchorConfig, OffsetHint, PeriodKind, UtcOffset, WeekStart,
};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use proptest::prelude::*;

const KINDS: [PeriodKind; 5] = [
    PeriodKind::Daily,
    PeriodKind::Weekly,
    PeriodKind::Monthly,
    PeriodKind::HalfYearly,
    PeriodKind::Yearly,
];

// Second-precision instants from 1970 through 2100.
fn instants() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn anchor_configs() -> impl Strategy<Value = AnchorConfig> {
    (
        prop::sample::select(vec![WeekStart::Monday, WeekStart::Sunday]),
        1u32..=31,
    )
        .prop_map(|(week_start, anchor_day)| AnchorConfig {
            week_start,
            anchor_day,
        })
}

proptest! {
    #[test]
    fn clamp_is_total_over_integers(minutes in any::<i64>()) {
        let clamped = clamp_offset_minutes(minutes);
        prop_assert!((-840..=840).contains(&clamped));
    }

    #[test]
    fn offset_resolution_is_total_over_floats(
        minutes in any::<f64>(),
        fallback in -840i32..=840,
    ) {
        let resolved = resolve_offset(
            Some(OffsetHint::Minutes(minutes)),
            UtcOffset::from_minutes(fallback),
        );
        prop_assert!((-840..=840).contains(&resolved.minutes()));
    }

    #[test]
    fn projection_round_trips_at_day_starts(
        instant in instants(),
        offset in -840i32..=840,
    ) {
        let offset = UtcOffset::from_minutes(offset);
        let day = local_day(instant, offset);
        let start = utc_start_of(day, offset);
        prop_assert!(start <= instant);
        prop_assert_eq!(local_day(start, offset), day);
    }

    #[test]
    fn windows_are_half_open_and_contain_their_reference(
        instant in instants(),
        offset in -840i32..=840,
        anchors in anchor_configs(),
        kind_index in 0usize..KINDS.len(),
    ) {
        let window = period_window(KINDS[kind_index], instant, offset, Some(anchors));
        prop_assert!(window.start_local < window.end_local);
        prop_assert!(window.start_utc < window.end_utc);
        prop_assert!(window.contains(instant));
        prop_assert!(window.contains_local(local_day(instant, UtcOffset::from_minutes(offset))));
    }

    #[test]
    fn consecutive_windows_tile_the_timeline(
        instant in instants(),
        offset in -840i32..=840,
        anchors in anchor_configs(),
        kind_index in 0usize..KINDS.len(),
    ) {
        let kind = KINDS[kind_index];
        let window = period_window(kind, instant, offset, Some(anchors));
        let next = period_window(kind, window.end_utc, offset, Some(anchors));
        prop_assert_eq!(next.start_local, window.end_local);
        prop_assert_eq!(next.start_utc, window.end_utc);
    }

    #[test]
    fn monthly_start_is_the_anchor_or_a_month_end(
        instant in instants(),
        offset in -840i32..=840,
        anchor_day in 1u32..=31,
    ) {
        let anchors = AnchorConfig { anchor_day, ..AnchorConfig::default() };
        let window = period_window(PeriodKind::Monthly, instant, offset, Some(anchors));
        let start = window.start_local;
        if start.day() != anchor_day {
            // The anchor was clamped, so the start must be its month's last day.
            prop_assert!(start.day() < anchor_day);
            let next_day = start.succ_opt().unwrap();
            prop_assert_ne!(next_day.month(), start.month());
        }
    }

    #[test]
    fn any_tag_parses_to_some_kind(tag in ".*") {
        let kind = PeriodKind::from_tag(&tag);
        prop_assert!(KINDS.contains(&kind));
    }
}
