//! One axis, end to end.
//!
//! [`AxisChannel`] wires the pieces together for a single cable-wrapped axis:
//! each encoder sample is fed to the wrap counter, mapped onto its wrap plane,
//! and the unwrapped position is deglitched. Deglitching after unwrapping
//! keeps a legitimate seam crossing (359.9° → 0°) from looking like a jump of
//! 360°. Targets are resolved against the deglitched unwrapped position.
//!
//! Deglitch timestamps are the start time plus monotonic time since start,
//! so a wall-clock step does not show up as a burst of speed.
//!
//! ```
//! use celestial_axis::clock::ManualClock;
//! use celestial_axis::{AxisChannel, AxisConfig};
//! use celestial_units::angle::deg;
//! use chrono::{DateTime, TimeDelta};
//!
//! let clock = ManualClock::new(DateTime::from_timestamp(0, 0).unwrap());
//! let mut az = AxisChannel::with_clock(AxisConfig::default(), deg(359.9), 1, clock.clone()).unwrap();
//!
//! clock.advance(TimeDelta::milliseconds(110));
//! let reading = az.update(deg(0.0));
//! assert_eq!(reading.wrap_count, 2);
//! assert!((reading.unwrapped.degrees() - 720.0).abs() < 1e-9);
//! ```

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use celestial_units::{validate_finite_angle, Angle, AstroError, AstroResult, MathErrorKind};

use crate::clock::{Clock, SystemClock};
use crate::config::AxisConfig;
use crate::counter::WrapCounter;
use crate::deglitch::Deglitch;
use crate::median::MedianFilter;
use crate::wrap::{closest, map};

/// Result of one [`AxisChannel::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisReading {
    /// Encoder angle as sampled.
    pub angle: Angle,
    pub wrap_count: i32,
    /// Deglitched position on the wrap plane, in degrees.
    pub unwrapped: Angle,
}

#[derive(Debug, Clone)]
pub struct AxisChannel<C: Clock + Clone = SystemClock> {
    config: AxisConfig,
    deglitch: Deglitch,
    counter: WrapCounter<C>,
    clock: C,
    start: (DateTime<Utc>, Duration),
    last: AxisReading,
}

impl AxisChannel<SystemClock> {
    pub fn new(config: AxisConfig, angle: Angle, wrap_count: i32) -> AstroResult<Self> {
        Self::with_clock(config, angle, wrap_count, SystemClock::new())
    }
}

impl<C: Clock + Clone> AxisChannel<C> {
    pub fn with_clock(
        config: AxisConfig,
        angle: Angle,
        wrap_count: i32,
        clock: C,
    ) -> AstroResult<Self> {
        config.validate()?;
        let angle = validate_finite_angle(angle, "AxisChannel start angle")?;

        let start = (clock.now(), clock.monotonic());
        let unwrapped = map(angle, wrap_count);
        let deglitch = Deglitch::new(unwrapped, start.0, config.deglitch_max_rate());
        let counter = WrapCounter::with_clock(angle, wrap_count, clock.clone())
            .with_crossing_rate_limit(config.crossing_rate_limit());
        let last = AxisReading {
            angle,
            wrap_count,
            unwrapped,
        };

        Ok(Self {
            config,
            deglitch,
            counter,
            clock,
            start,
            last,
        })
    }

    /// Seeds the wrap count from startup potentiometer readings.
    pub fn from_potentiometer<I>(
        config: AxisConfig,
        angle: Angle,
        voltages: I,
        clock: C,
    ) -> AstroResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let wrap_count = startup_wrap_count(&config, voltages)?;
        Self::with_clock(config, angle, wrap_count, clock)
    }

    pub fn config(&self) -> &AxisConfig {
        &self.config
    }

    /// The most recent reading, or the starting position before any update.
    pub fn last(&self) -> AxisReading {
        self.last
    }

    pub fn update(&mut self, sample: Angle) -> AxisReading {
        let wrap_count = self.counter.update(sample);
        let unwrapped = self
            .deglitch
            .update(map(sample, wrap_count), self.timeline());

        debug!(
            "axis sample {:.4} deg, wrap count {}, unwrapped {:.4} deg",
            sample.degrees(),
            wrap_count,
            unwrapped.degrees()
        );

        self.last = AxisReading {
            angle: sample,
            wrap_count,
            unwrapped,
        };
        self.last
    }

    fn timeline(&self) -> DateTime<Utc> {
        let (wall, tick) = self.start;
        let since = self.clock.monotonic().saturating_sub(tick);
        TimeDelta::from_std(since)
            .ok()
            .and_then(|d| wall.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Unwrapped position to command for an encoder-space `desired` angle.
    pub fn target(&self, desired: Angle) -> Angle {
        closest(
            self.last.unwrapped,
            desired,
            self.last.wrap_count,
            self.config.max_wrap_count,
        )
    }
}

/// Median-filters potentiometer voltages and converts the result to a wrap
/// count.
///
/// Fewer readings than the median window leave zeros in the window, which
/// pulls the median towards 0 V.
pub fn startup_wrap_count<I>(config: &AxisConfig, voltages: I) -> AstroResult<i32>
where
    I: IntoIterator<Item = f64>,
{
    let mut filter = MedianFilter::<f64>::new(config.median_window)?;
    let volts = voltages
        .into_iter()
        .map(|v| filter.update(v))
        .last()
        .ok_or_else(|| {
            AstroError::math_error(
                "startup_wrap_count",
                MathErrorKind::InvalidInput,
                "no potentiometer readings",
            )
        })?;
    Ok(config.potentiometer.wrap_count(volts))
}
