//! Quarter-hour rounding for clock-in and clock-out times.
//!
//! Both policies snap to a 15 minute boundary, but they differ in how far past
//! a quarter the clock may be before it is rounded up instead of down:
//!
//! | policy                 | threshold | 8:35  | 8:40  | 8:41  |
//! |------------------------|-----------|-------|-------|-------|
//! | [`round_prev_quarter`] | 10 min    | 8:30  | 8:30  | 8:45  |
//! | [`round_next_quarter`] | 5 min     | 8:30  | 8:45  | 8:45  |
//!
//! Seconds are dropped. Rounding up from 23:45 or later wraps to 00:00 of the
//! same represented day; no date rollover happens here.

use chrono::{NaiveTime, TimeDelta, Timelike};

const QUARTER: u32 = 15;

/// Minutes past a quarter tolerated before [`round_prev_quarter`] rounds up.
pub const PREV_QUARTER_THRESHOLD: u32 = 10;

/// Minutes past a quarter tolerated before [`round_next_quarter`] rounds up.
pub const NEXT_QUARTER_THRESHOLD: u32 = 5;

/// Rounds a start time back to the previous quarter-hour.
///
/// - 8:30 stays 8:30
/// - 8:40 becomes 8:30
/// - 8:41 becomes 8:45
pub fn round_prev_quarter(value: NaiveTime) -> NaiveTime {
    round_quarter(value, PREV_QUARTER_THRESHOLD)
}

/// Rounds a stop time to the next quarter-hour.
///
/// - 8:30 stays 8:30
/// - 8:35 becomes 8:30
/// - 8:36 becomes 8:45
pub fn round_next_quarter(value: NaiveTime) -> NaiveTime {
    round_quarter(value, NEXT_QUARTER_THRESHOLD)
}

/// Rounds `value` down to a quarter-hour, or up when the minutes past that
/// quarter exceed `threshold`.
pub fn round_quarter(value: NaiveTime, threshold: u32) -> NaiveTime {
    let minute = value.minute();
    let remainder = minute % QUARTER;
    let rounded = if remainder > threshold {
        minute - remainder + QUARTER
    } else {
        minute - remainder
    };

    let since_midnight = i64::from(value.hour() * 60 + rounded);
    // NaiveTime addition wraps at midnight.
    NaiveTime::MIN + TimeDelta::minutes(since_midnight)
}
