//! Cable-wrap potentiometer model.
//!
//! The wrap potentiometer turns with the cable wrap, so its voltage is a
//! linear function of the unwrapped azimuth. It is read once at startup to
//! seed the wrap count before the encoder takes over.

use celestial_units::constants::DEGREE_PER_REVOLUTION;
use celestial_units::{check_finite, Angle, AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Voltage at azimuth 0 on wrap plane 0.
pub const DEFAULT_VOLT_OFFSET: f64 = 2.73;

/// Voltage change per full revolution.
pub const DEFAULT_VOLTS_PER_REVOLUTION: f64 = 0.06467;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapPotentiometer {
    pub volt_offset: f64,
    pub volts_per_revolution: f64,
}

impl Default for WrapPotentiometer {
    fn default() -> Self {
        Self {
            volt_offset: DEFAULT_VOLT_OFFSET,
            volts_per_revolution: DEFAULT_VOLTS_PER_REVOLUTION,
        }
    }
}

impl WrapPotentiometer {
    pub fn new(volt_offset: f64, volts_per_revolution: f64) -> Self {
        Self {
            volt_offset,
            volts_per_revolution,
        }
    }

    pub fn validate(&self) -> AstroResult<()> {
        check_finite(self.volt_offset, "potentiometer.volt_offset")?;
        let vpr = check_finite(self.volts_per_revolution, "potentiometer.volts_per_revolution")?;
        if vpr == 0.0 {
            return Err(AstroError::invalid_config(
                "potentiometer.volts_per_revolution",
                "must be non-zero",
            ));
        }
        Ok(())
    }

    /// Expected voltage for encoder azimuth `az` on plane `wrap_count`.
    pub fn voltage(&self, az: Angle, wrap_count: i32) -> f64 {
        let volts_per_degree = self.volts_per_revolution / DEGREE_PER_REVOLUTION;
        self.volt_offset
            + self.volts_per_revolution * f64::from(wrap_count)
            + volts_per_degree * az.degrees()
    }

    /// Wrap count for a voltage, truncated toward zero.
    ///
    /// Truncation means the half revolution below plane 0 also reads as 0.
    pub fn wrap_count(&self, volts: f64) -> i32 {
        ((volts - self.volt_offset) / self.volts_per_revolution) as i32
    }
}
