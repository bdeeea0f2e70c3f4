use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Lowest supported offset: fourteen hours west of UTC, in minutes.
pub const MIN_OFFSET_MINUTES: i32 = -840;
/// Highest supported offset: fourteen hours east of UTC, in minutes.
pub const MAX_OFFSET_MINUTES: i32 = 840;

/// Clamps raw minutes into the plausible offset range.
///
/// Total over the integer domain; out-of-range values saturate at the bounds
/// instead of being rejected.
pub fn clamp_offset_minutes(minutes: i64) -> i32 {
    minutes.clamp(MIN_OFFSET_MINUTES as i64, MAX_OFFSET_MINUTES as i64) as i32
}

/// A timezone offset in whole minutes east of UTC, always in `[-840, 840]`.
///
/// Every constructor clamps, so values of this type satisfy the range
/// invariant by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset { minutes: 0 };

    pub fn from_minutes(minutes: i32) -> Self {
        Self {
            minutes: clamp_offset_minutes(minutes as i64),
        }
    }

    /// Builds an offset from possibly fractional minutes.
    ///
    /// Fractions truncate toward zero and infinite values saturate at the
    /// range bounds. `NaN` has no meaningful clamp target and yields `None`;
    /// [`resolve_offset`] maps that to the caller's fallback.
    pub fn from_minutes_f64(minutes: f64) -> Option<Self> {
        if minutes.is_nan() {
            return None;
        }
        // The cast saturates, so infinities land on the bounds after clamping.
        Some(Self::from_minutes(minutes.trunc() as i32))
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// The offset as a signed duration, for shifting instants.
    pub fn to_duration(&self) -> Duration {
        Duration::minutes(self.minutes as i64)
    }
}

impl Default for UtcOffset {
    fn default() -> Self {
        Self::UTC
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let magnitude = self.minutes.unsigned_abs();
        write!(f, "{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
    }
}

impl Serialize for UtcOffset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.minutes)
    }
}

impl<'de> Deserialize<'de> for UtcOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let minutes = i64::deserialize(deserializer)?;
        Ok(UtcOffset {
            minutes: clamp_offset_minutes(minutes),
        })
    }
}

/// Raw, untrusted offset input accompanying a client request.
///
/// Mirrors the shapes clients actually send: an explicit minute count, or a
/// date stamp whose trailing ISO-8601 suffix carries the offset.
#[derive(Debug, Clone, Copy)]
pub enum OffsetHint<'a> {
    /// Offset in minutes east of UTC; fractions truncate toward zero.
    Minutes(f64),
    /// A date string ending in `Z`, `±HH:MM`, or `±HHMM`.
    Stamp(&'a str),
}

/// Resolves a usable offset from an optional client hint.
///
/// Total: every input path has a defined outcome, and unusable hints (absent,
/// `NaN` minutes, a stamp without a recognizable suffix) resolve to
/// `fallback`. The caller owns the fallback choice; this function never
/// consults the executing environment's timezone.
pub fn resolve_offset(hint: Option<OffsetHint<'_>>, fallback: UtcOffset) -> UtcOffset {
    let resolved = match hint {
        Some(OffsetHint::Minutes(minutes)) => {
            let offset = UtcOffset::from_minutes_f64(minutes);
            if let Some(offset) = offset {
                if f64::from(offset.minutes()) != minutes.trunc() {
                    debug!(
                        "clamped offset hint {} to {} minutes",
                        minutes,
                        offset.minutes()
                    );
                }
            }
            offset
        }
        Some(OffsetHint::Stamp(stamp)) => {
            offset_suffix_minutes(stamp).map(UtcOffset::from_minutes)
        }
        None => None,
    };
    resolved.unwrap_or(fallback)
}

/// Extracts the trailing ISO-8601 offset suffix from a date stamp.
///
/// Recognizes `Z`/`z` (zero), `±HH:MM`, and `±HHMM`. The rest of the string
/// is not inspected; a missing or malformed suffix yields `None`. Returned
/// minutes are raw; range clamping belongs to [`UtcOffset::from_minutes`].
pub fn offset_suffix_minutes(stamp: &str) -> Option<i32> {
    let bytes = stamp.trim().as_bytes();
    if bytes.is_empty() {
        return None;
    }
    if matches!(bytes[bytes.len() - 1], b'Z' | b'z') {
        return Some(0);
    }
    if bytes.len() >= 6 {
        let tail = &bytes[bytes.len() - 6..];
        if matches!(tail[0], b'+' | b'-') && tail[3] == b':' {
            if let (Some(hours), Some(minutes)) = (two_digits(&tail[1..3]), two_digits(&tail[4..6]))
            {
                return Some(signed_minutes(tail[0], hours, minutes));
            }
        }
    }
    if bytes.len() >= 5 {
        let tail = &bytes[bytes.len() - 5..];
        if matches!(tail[0], b'+' | b'-') {
            if let (Some(hours), Some(minutes)) = (two_digits(&tail[1..3]), two_digits(&tail[3..5]))
            {
                return Some(signed_minutes(tail[0], hours, minutes));
            }
        }
    }
    None
}

fn two_digits(bytes: &[u8]) -> Option<i32> {
    if bytes.len() == 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit() {
        Some(i32::from(bytes[0] - b'0') * 10 + i32::from(bytes[1] - b'0'))
    } else {
        None
    }
}

fn signed_minutes(sign: u8, hours: i32, minutes: i32) -> i32 {
    let magnitude = hours * 60 + minutes;
    if sign == b'-' {
        -magnitude
    } else {
        magnitude
    }
}
