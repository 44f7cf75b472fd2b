//! Wall-clock helpers used by the streaming filters.

use chrono::{DateTime, TimeDelta, Utc};

use crate::constants::NANOSECONDS_PER_SECOND_F64;

/// Signed length of `d` in seconds.
///
/// Uses nanoseconds when they fit in an `i64` (about 292 years) and falls back
/// to milliseconds otherwise.
pub fn delta_seconds(d: TimeDelta) -> f64 {
    match d.num_nanoseconds() {
        Some(ns) => ns as f64 / NANOSECONDS_PER_SECOND_F64,
        None => d.num_milliseconds() as f64 / 1e3,
    }
}

/// Signed seconds from `from` to `to`; negative if `to` is earlier.
pub fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    delta_seconds(to - from)
}

/// Seconds elapsed since the most recent multiple of `boundary` in Unix time.
///
/// With a 100 ms boundary, a time of `...416.172056141` gives `0.072056141`.
/// The phase is computed in integer nanoseconds. A non-positive boundary
/// returns 0.
pub fn seconds_after_boundary(t: DateTime<Utc>, boundary: TimeDelta) -> f64 {
    let period = match boundary.num_nanoseconds() {
        Some(ns) if ns > 0 => ns as i128,
        _ => return 0.0,
    };
    let now = t.timestamp() as i128 * 1_000_000_000 + t.timestamp_subsec_nanos() as i128;
    now.rem_euclid(period) as f64 / NANOSECONDS_PER_SECOND_F64
}
