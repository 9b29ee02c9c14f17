use chrono::{NaiveDateTime, TimeDelta};

use crate::{BOARDING_LEAD_MINUTES, Minutes};

/// Whole minutes from `now` until boarding of a flight departing at
/// `next_flight`, floored and never negative
pub fn minutes_until_boarding(next_flight: NaiveDateTime, now: NaiveDateTime) -> i64 {
    next_flight
        .checked_sub_signed(TimeDelta::minutes(BOARDING_LEAD_MINUTES))
        .map_or(0, |boarding| (boarding - now).num_minutes().max(0))
}

/// Compact duration label: `45m`, `2h`, `2h 5m`
pub fn format_duration(minutes: Minutes) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let (hours, mins) = (minutes / 60, minutes % 60);
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}
