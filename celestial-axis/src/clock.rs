//! Time sources for components that read the clock themselves.
//!
//! A [`Clock`] gives two readings. [`Clock::now`] is UTC wall time, used for
//! timestamps. [`Clock::monotonic`] never goes backwards and is what elapsed
//! intervals are measured with, so an NTP step or a manual clock change
//! cannot shrink or widen a wrap-crossing window.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeDelta, Utc};

pub trait Clock {
    /// Current UTC wall time.
    fn now(&self) -> DateTime<Utc>;

    /// Time since an arbitrary fixed origin. Never decreases.
    fn monotonic(&self) -> Duration;
}

/// Wall clock for timestamps, [`Instant`] for intervals.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the component under test. Wall time and monotonic time move
/// together under [`advance`](Self::advance); [`set`](Self::set) and
/// [`step_wall`](Self::step_wall) move wall time alone, the way an NTP
/// correction would.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
    ticks: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
            ticks: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Jumps wall time to `t`. Monotonic time is unchanged.
    pub fn set(&self, t: DateTime<Utc>) {
        self.now.set(t);
    }

    /// Lets `by` pass. A negative `by` rewinds wall time only.
    pub fn advance(&self, by: TimeDelta) {
        self.step_wall(by);
        if let Ok(by) = by.to_std() {
            self.ticks.set(self.ticks.get().saturating_add(by));
        }
    }

    /// Steps wall time by `by` without any time passing.
    pub fn step_wall(&self, by: TimeDelta) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn monotonic(&self) -> Duration {
        self.ticks.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let start = DateTime::from_timestamp(1_000, 0).unwrap();
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(TimeDelta::milliseconds(250));
        assert_eq!(clock.now(), start + TimeDelta::milliseconds(250));
        assert_eq!(clock.monotonic(), Duration::from_millis(250));

        clock.set(start);
        assert_eq!(handle.now(), start);
        assert_eq!(handle.monotonic(), Duration::from_millis(250));
    }

    #[test]
    fn test_wall_steps_leave_monotonic_time_alone() {
        let start = DateTime::from_timestamp(1_000, 0).unwrap();
        let clock = ManualClock::new(start);

        clock.advance(TimeDelta::milliseconds(110));
        clock.step_wall(TimeDelta::seconds(-1));
        assert_eq!(clock.now(), start - TimeDelta::milliseconds(890));
        assert_eq!(clock.monotonic(), Duration::from_millis(110));

        clock.advance(TimeDelta::seconds(-5));
        assert_eq!(clock.monotonic(), Duration::from_millis(110));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.monotonic();
        let b = clock.monotonic();
        assert!(b >= a);
        assert!(clock.now() >= DateTime::from_timestamp(1_720_000_000, 0).unwrap());
    }
}
