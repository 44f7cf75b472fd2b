//! Wrap-count tracking from a live encoder.
//!
//! The encoder reports the axis angle in `[0°, 360°)`. [`WrapCounter`] watches
//! successive samples for a jump across the 0°/360° seam and adjusts the wrap
//! count: clockwise through the seam (359.9° → 0°) increments it,
//! counter-clockwise (0° → 359.9°) decrements it.
//!
//! # Crossing window
//!
//! A sample pair counts as a crossing when one side is above
//! `360 − elapsed_seconds` and the other below `elapsed_seconds`, both read as
//! degrees. The window therefore widens with the polling interval, about 0.1°
//! each side at 10 Hz. The seam distance covered is then checked against a
//! rate limit; a crossing faster than the limit is treated as a glitch and
//! ignored without moving the reference sample.
//!
//! Elapsed time is read from [`Clock::monotonic`], so stepping the wall clock
//! neither opens nor closes the window.
//!
//! ```
//! use celestial_axis::clock::ManualClock;
//! use celestial_axis::WrapCounter;
//! use celestial_units::angle::deg;
//! use chrono::{DateTime, TimeDelta};
//!
//! let clock = ManualClock::new(DateTime::from_timestamp(0, 0).unwrap());
//! let mut counter = WrapCounter::with_clock(deg(359.9), 1, clock.clone());
//!
//! clock.advance(TimeDelta::milliseconds(110));
//! assert_eq!(counter.update(deg(0.0)), 2);
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use celestial_units::constants::DEGREE_PER_REVOLUTION;
use celestial_units::{Angle, AngularRate};

use crate::clock::{Clock, SystemClock};

/// Default crossing rate limit, degrees per second.
pub const DEFAULT_CROSSING_RATE_LIMIT: f64 = 2.0;

/// Accumulates a wrap count from successive encoder samples.
#[derive(Debug, Clone)]
pub struct WrapCounter<C: Clock = SystemClock> {
    wrap_count: i32,
    prev_angle: Angle,
    prev_time: DateTime<Utc>,
    prev_tick: Duration,
    crossing_rate_limit: AngularRate,
    clock: C,
}

impl WrapCounter<SystemClock> {
    /// Starts from an encoder angle and the wrap count read at startup.
    pub fn new(angle: Angle, wrap_count: i32) -> Self {
        Self::with_clock(angle, wrap_count, SystemClock::new())
    }
}

impl<C: Clock> WrapCounter<C> {
    pub fn with_clock(angle: Angle, wrap_count: i32, clock: C) -> Self {
        let prev_time = clock.now();
        let prev_tick = clock.monotonic();
        Self {
            wrap_count,
            prev_angle: angle,
            prev_time,
            prev_tick,
            crossing_rate_limit: AngularRate::from_degrees_per_second(DEFAULT_CROSSING_RATE_LIMIT),
            clock,
        }
    }

    /// Replaces the rate above which a seam crossing is treated as a glitch.
    pub fn with_crossing_rate_limit(mut self, limit: AngularRate) -> Self {
        self.crossing_rate_limit = limit;
        self
    }

    pub fn wrap_count(&self) -> i32 {
        self.wrap_count
    }

    /// The sample the next update is compared against, with the wall time it
    /// was taken.
    pub fn reference(&self) -> (Angle, DateTime<Utc>) {
        (self.prev_angle, self.prev_time)
    }

    pub fn crossing_rate_limit(&self) -> AngularRate {
        self.crossing_rate_limit
    }

    /// Feeds one encoder sample and returns the wrap count.
    pub fn update(&mut self, sample: Angle) -> i32 {
        let tick = self.clock.monotonic();
        let elapsed = tick.saturating_sub(self.prev_tick).as_secs_f64();

        let upper = DEGREE_PER_REVOLUTION - elapsed;
        let lower = elapsed;
        let prev = self.prev_angle.degrees();
        let cur = sample.degrees();

        if (prev > upper && cur < lower) || (prev < lower && cur > upper) {
            let seam = DEGREE_PER_REVOLUTION - (cur - prev).abs();
            let rate = AngularRate::from_seconds(Angle::from_degrees(seam), elapsed);

            if rate > self.crossing_rate_limit {
                warn!(
                    "wrap crossing ignored: {:.4} deg -> {:.4} deg at {:.3} deg/s exceeds {:.3} deg/s",
                    prev,
                    cur,
                    rate.degrees_per_second(),
                    self.crossing_rate_limit.degrees_per_second()
                );
                return self.wrap_count;
            }

            if sample > self.prev_angle {
                self.wrap_count -= 1;
            } else if sample < self.prev_angle {
                self.wrap_count += 1;
            }
            debug!(
                "wrap crossing: {:.4} deg -> {:.4} deg after {:.3} s, wrap count {}",
                prev, cur, elapsed, self.wrap_count
            );
        }

        self.prev_angle = sample;
        self.prev_time = self.clock.now();
        self.prev_tick = tick;
        self.wrap_count
    }
}
