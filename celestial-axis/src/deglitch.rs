//! Rate-bounded sample filter.

use chrono::{DateTime, Utc};
use log::warn;

use celestial_units::{elapsed_seconds, Angle, AngularRate};

/// Rejects samples that imply a physically impossible rate of motion.
///
/// A rejected sample is replaced by the reference angle advanced at the
/// maximum rate (always in the positive direction). The reference is only
/// moved by accepted samples, so a run of glitches is measured against the
/// last good reading.
#[derive(Debug, Clone)]
pub struct Deglitch {
    prev_angle: Angle,
    prev_time: DateTime<Utc>,
    max_rate_deg_per_sec: f64,
}

impl Deglitch {
    pub fn new(angle: Angle, time: DateTime<Utc>, max_rate: AngularRate) -> Self {
        Self {
            prev_angle: angle,
            prev_time: time,
            max_rate_deg_per_sec: max_rate.degrees_per_second(),
        }
    }

    pub fn max_rate(&self) -> AngularRate {
        AngularRate::from_degrees_per_second(self.max_rate_deg_per_sec)
    }

    /// The last accepted sample and its time.
    pub fn reference(&self) -> (Angle, DateTime<Utc>) {
        (self.prev_angle, self.prev_time)
    }

    /// Filters one sample taken at `time`.
    ///
    /// A sample at the reference time gives an infinite rate and is rejected
    /// unless it equals the reference.
    pub fn update(&mut self, sample: Angle, time: DateTime<Utc>) -> Angle {
        let delta = time - self.prev_time;
        let rate = (sample - self.prev_angle) / delta;
        let rate_deg = rate.degrees_per_second();

        if rate_deg.abs() > self.max_rate_deg_per_sec {
            let elapsed = elapsed_seconds(self.prev_time, time);
            let clamped = Angle::from_degrees(
                self.prev_angle.degrees() + self.max_rate_deg_per_sec * elapsed,
            );
            warn!(
                "deglitch at {}: sample {:.4} deg, reference {:.4} deg, rate {:.3} deg/s; using {:.4} deg",
                time,
                sample.degrees(),
                self.prev_angle.degrees(),
                rate_deg,
                clamped.degrees()
            );
            return clamped;
        }

        self.prev_angle = sample;
        self.prev_time = time;
        sample
    }
}
