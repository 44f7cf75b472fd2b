//! Per-axis tuning.
//!
//! Every field has a default, so a configuration file only needs the values
//! it changes:
//!
//! ```
//! use celestial_axis::AxisConfig;
//!
//! let config = AxisConfig {
//!     max_wrap_count: 3,
//!     ..AxisConfig::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.median_window, 5);
//! ```

use celestial_units::{check_finite, AngularRate, AstroError, AstroResult};

use crate::counter::DEFAULT_CROSSING_RATE_LIMIT;
use crate::potentiometer::WrapPotentiometer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisConfig {
    /// Wrap planes `±max_wrap_count` are never selected as targets.
    pub max_wrap_count: i32,
    /// Seam crossings faster than this are ignored as glitches.
    pub crossing_rate_limit_deg_per_sec: f64,
    /// Encoder samples faster than this are clamped.
    pub deglitch_max_rate_deg_per_sec: f64,
    /// Samples in the startup potentiometer median.
    pub median_window: usize,
    pub potentiometer: WrapPotentiometer,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            max_wrap_count: 5,
            crossing_rate_limit_deg_per_sec: DEFAULT_CROSSING_RATE_LIMIT,
            deglitch_max_rate_deg_per_sec: 2.0,
            median_window: 5,
            potentiometer: WrapPotentiometer::default(),
        }
    }
}

impl AxisConfig {
    pub fn validate(&self) -> AstroResult<()> {
        if self.max_wrap_count <= 0 {
            return Err(AstroError::invalid_config(
                "max_wrap_count",
                "must be positive",
            ));
        }
        positive_rate(
            self.crossing_rate_limit_deg_per_sec,
            "crossing_rate_limit_deg_per_sec",
        )?;
        positive_rate(
            self.deglitch_max_rate_deg_per_sec,
            "deglitch_max_rate_deg_per_sec",
        )?;
        if self.median_window == 0 {
            return Err(AstroError::invalid_config(
                "median_window",
                "must be at least 1",
            ));
        }
        self.potentiometer.validate()
    }

    pub fn crossing_rate_limit(&self) -> AngularRate {
        AngularRate::from_degrees_per_second(self.crossing_rate_limit_deg_per_sec)
    }

    pub fn deglitch_max_rate(&self) -> AngularRate {
        AngularRate::from_degrees_per_second(self.deglitch_max_rate_deg_per_sec)
    }
}

fn positive_rate(value: f64, parameter: &str) -> AstroResult<()> {
    if check_finite(value, parameter)? <= 0.0 {
        return Err(AstroError::invalid_config(parameter, "must be positive"));
    }
    Ok(())
}
