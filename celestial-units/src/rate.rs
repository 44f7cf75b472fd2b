//! Angular rates.
//!
//! An [`AngularRate`] is an angle per second. It is built by dividing an
//! [`Angle`] by a duration and is stored in radians per second; conversions to
//! the other six units go through the same factors as [`Angle`].
//!
//! ```
//! use std::time::Duration;
//! use celestial_units::{AngularRateUnit, angle::deg};
//!
//! let rate = deg(90.0) / Duration::from_secs(10);
//! assert_eq!(rate.unit(), AngularRateUnit::RadianPerSec);
//! assert!((rate.degrees_per_second() - 9.0).abs() < 1e-12);
//!
//! let moved = rate.mult_time(0.5);
//! assert!((moved.degrees() - 4.5).abs() < 1e-12);
//! ```
//!
//! Comparisons are made on radians per second and, like [`Angle`], use exact
//! float equality.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Div, Mul, Neg, Sub};
use core::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;

use crate::angle::{Angle, AngleUnit};
use crate::time::delta_seconds;
use crate::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of an [`AngularRate`]. Every unit is per second.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AngularRateUnit {
    #[default]
    RadianPerSec,
    DegreePerSec,
    MilliRadianPerSec,
    ArcMinutePerSec,
    ArcSecondPerSec,
    MilliArcSecondPerSec,
    HourPerSec,
}

impl AngularRateUnit {
    pub const ALL: [AngularRateUnit; 7] = [
        AngularRateUnit::RadianPerSec,
        AngularRateUnit::DegreePerSec,
        AngularRateUnit::MilliRadianPerSec,
        AngularRateUnit::ArcMinutePerSec,
        AngularRateUnit::ArcSecondPerSec,
        AngularRateUnit::MilliArcSecondPerSec,
        AngularRateUnit::HourPerSec,
    ];

    /// The angle unit covered in one second.
    pub fn angle_unit(self) -> AngleUnit {
        match self {
            AngularRateUnit::RadianPerSec => AngleUnit::Radian,
            AngularRateUnit::DegreePerSec => AngleUnit::Degree,
            AngularRateUnit::MilliRadianPerSec => AngleUnit::MilliRadian,
            AngularRateUnit::ArcMinutePerSec => AngleUnit::ArcMinute,
            AngularRateUnit::ArcSecondPerSec => AngleUnit::ArcSecond,
            AngularRateUnit::MilliArcSecondPerSec => AngleUnit::MilliArcSecond,
            AngularRateUnit::HourPerSec => AngleUnit::Hour,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AngularRateUnit::RadianPerSec => "rad/sec",
            AngularRateUnit::DegreePerSec => "deg/sec",
            AngularRateUnit::MilliRadianPerSec => "mrad/sec",
            AngularRateUnit::ArcMinutePerSec => "arcmin/sec",
            AngularRateUnit::ArcSecondPerSec => "arcsec/sec",
            AngularRateUnit::MilliArcSecondPerSec => "mas/sec",
            AngularRateUnit::HourPerSec => "hr/sec",
        }
    }
}

impl From<AngleUnit> for AngularRateUnit {
    fn from(unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Radian => AngularRateUnit::RadianPerSec,
            AngleUnit::Degree => AngularRateUnit::DegreePerSec,
            AngleUnit::MilliRadian => AngularRateUnit::MilliRadianPerSec,
            AngleUnit::ArcMinute => AngularRateUnit::ArcMinutePerSec,
            AngleUnit::ArcSecond => AngularRateUnit::ArcSecondPerSec,
            AngleUnit::MilliArcSecond => AngularRateUnit::MilliArcSecondPerSec,
            AngleUnit::Hour => AngularRateUnit::HourPerSec,
        }
    }
}

impl fmt::Display for AngularRateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngularRateUnit {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        let name = s.trim();
        AngularRateUnit::ALL
            .into_iter()
            .find(|u| u.as_str() == name)
            .ok_or_else(|| AstroError::unknown_unit(name))
    }
}

/// An angle covered per `timebase` (always one second).
///
/// `value` is expressed in `unit`; `angle` is the same quantity as an
/// [`Angle`] in the matching angle unit.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngularRate {
    unit: AngularRateUnit,
    angle: Angle,
    timebase: Duration,
    value: f64,
}

impl AngularRate {
    const TIMEBASE: Duration = Duration::from_secs(1);

    fn per_second(unit: AngularRateUnit, value: f64) -> Self {
        Self {
            unit,
            angle: Angle::new(unit.angle_unit(), value),
            timebase: Self::TIMEBASE,
            value,
        }
    }

    /// Rate of `angle` covered over `elapsed`, in radians per second.
    pub fn new(angle: Angle, elapsed: Duration) -> Self {
        Self::from_seconds(angle, elapsed.as_secs_f64())
    }

    /// Rate of `angle` covered over a signed number of seconds.
    ///
    /// Zero seconds gives an infinite or NaN rate; nothing is checked.
    pub fn from_seconds(angle: Angle, seconds: f64) -> Self {
        Self::per_second(AngularRateUnit::RadianPerSec, angle.radians() / seconds)
    }

    /// Builds a rate directly from a value in the given unit.
    pub fn with_unit(unit: AngularRateUnit, value: f64) -> Self {
        Self::per_second(unit, value)
    }

    pub fn from_degrees_per_second(value: f64) -> Self {
        Self::per_second(AngularRateUnit::DegreePerSec, value)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(self) -> AngularRateUnit {
        self.unit
    }

    #[inline]
    pub fn unit_str(self) -> &'static str {
        self.unit.as_str()
    }

    /// Angle covered in one `timebase`.
    #[inline]
    pub fn angle(self) -> Angle {
        self.angle
    }

    #[inline]
    pub fn timebase(self) -> Duration {
        self.timebase
    }

    pub fn to(self, unit: AngularRateUnit) -> Self {
        let v = self.angle.to(unit.angle_unit()).value();
        Self::per_second(unit, v)
    }

    pub fn to_radian(self) -> Self {
        self.to(AngularRateUnit::RadianPerSec)
    }

    pub fn to_degree(self) -> Self {
        self.to(AngularRateUnit::DegreePerSec)
    }

    pub fn to_milliradian(self) -> Self {
        self.to(AngularRateUnit::MilliRadianPerSec)
    }

    pub fn to_arcminute(self) -> Self {
        self.to(AngularRateUnit::ArcMinutePerSec)
    }

    pub fn to_arcsecond(self) -> Self {
        self.to(AngularRateUnit::ArcSecondPerSec)
    }

    pub fn to_milliarcsecond(self) -> Self {
        self.to(AngularRateUnit::MilliArcSecondPerSec)
    }

    pub fn to_hour(self) -> Self {
        self.to(AngularRateUnit::HourPerSec)
    }

    #[inline]
    pub fn radians_per_second(self) -> f64 {
        self.angle.radians()
    }

    #[inline]
    pub fn degrees_per_second(self) -> f64 {
        self.angle.degrees()
    }

    /// Angle covered in `seconds`, in radians.
    pub fn mult_time(self, seconds: f64) -> Angle {
        Angle::from_radians(self.radians_per_second() * seconds)
    }

    pub fn sub(self, other: AngularRate) -> Self {
        Self::per_second(
            AngularRateUnit::RadianPerSec,
            self.radians_per_second() - other.radians_per_second(),
        )
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::per_second(
            AngularRateUnit::RadianPerSec,
            self.radians_per_second() * factor,
        )
    }

    /// Dimensionless `self / other`.
    pub fn ratio(self, other: AngularRate) -> f64 {
        self.radians_per_second() / other.radians_per_second()
    }

    /// Magnitude of `self` with the sign of `sign`. Only the sign of the
    /// argument matters; zero counts as positive.
    pub fn sign(self, sign: f64) -> Self {
        let mag = self.radians_per_second().abs();
        let v = if sign < 0.0 { -mag } else { mag };
        Self::per_second(AngularRateUnit::RadianPerSec, v)
    }

    pub fn abs(self) -> Self {
        Self::per_second(
            AngularRateUnit::RadianPerSec,
            self.radians_per_second().abs(),
        )
    }
}

impl PartialEq for AngularRate {
    fn eq(&self, other: &Self) -> bool {
        self.radians_per_second() == other.radians_per_second()
    }
}

impl PartialOrd for AngularRate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.radians_per_second()
            .partial_cmp(&other.radians_per_second())
    }
}

impl fmt::Display for AngularRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl Sub for AngularRate {
    type Output = AngularRate;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        AngularRate::sub(self, rhs)
    }
}

impl Mul<f64> for AngularRate {
    type Output = AngularRate;
    #[inline]
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Neg for AngularRate {
    type Output = AngularRate;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Angle / Duration → AngularRate (rad/sec)
impl Div<Duration> for Angle {
    type Output = AngularRate;
    #[inline]
    fn div(self, elapsed: Duration) -> AngularRate {
        AngularRate::new(self, elapsed)
    }
}

/// Angle / TimeDelta → AngularRate (rad/sec); negative deltas give negative rates.
impl Div<TimeDelta> for Angle {
    type Output = AngularRate;
    #[inline]
    fn div(self, elapsed: TimeDelta) -> AngularRate {
        AngularRate::from_seconds(self, delta_seconds(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{deg, rad};
    use crate::constants::PI;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_new_normalizes_to_radian_per_second() {
        let r = rad(0.5) / Duration::from_secs(10);
        assert!((r.value() - 0.05).abs() < TOL);
        assert_eq!(r.unit_str(), "rad/sec");
        assert_eq!(r.timebase(), Duration::from_secs(1));

        let r = deg(90.0) / Duration::from_secs(10);
        assert!((r.value() - PI / 20.0).abs() < TOL);
    }

    #[test]
    fn test_to_degree() {
        let cases = [
            (Duration::from_secs(1), 90.0),
            (Duration::from_secs(10), 9.0),
            (Duration::from_millis(10), 9000.0),
        ];
        for (elapsed, expected) in cases {
            let d = (rad(PI / 2.0) / elapsed).to_degree();
            assert_eq!(d.unit(), AngularRateUnit::DegreePerSec);
            assert!((d.value() - expected).abs() < TOL, "{elapsed:?}");
        }
    }

    #[test]
    fn test_other_units() {
        let r = AngularRate::from_degrees_per_second(1.0);
        assert!((r.to_arcminute().value() - 60.0).abs() < TOL);
        assert!((r.to_arcsecond().value() - 3600.0).abs() < TOL);
        assert!((r.to_milliarcsecond().value() - 3_600_000.0).abs() < 1e-6);
        assert!((r.to_hour().value() - 1.0 / 15.0).abs() < TOL);
        assert!((r.to_milliradian().value() - PI / 0.18).abs() < TOL);
        assert!((r.to_milliradian().to_degree().value() - 1.0).abs() < TOL);
    }

    #[test]
    fn test_signed_time_delta() {
        let r = deg(10.0) / TimeDelta::milliseconds(-500);
        assert!((r.degrees_per_second() + 20.0).abs() < TOL);
    }

    #[test]
    fn test_mult_time() {
        let r = rad(0.5) / Duration::from_secs(1);
        let a = r.mult_time(0.1);
        assert_eq!(a.unit(), AngleUnit::Radian);
        assert!((a.value() - 0.05).abs() < TOL);
    }

    #[test]
    fn test_sub_scale_ratio() {
        let a = AngularRate::from_degrees_per_second(3.0);
        let b = AngularRate::from_degrees_per_second(1.0);
        assert!(((a - b).degrees_per_second() - 2.0).abs() < TOL);
        assert!(((a * 2.0).degrees_per_second() - 6.0).abs() < TOL);
        assert!((a.ratio(b) - 3.0).abs() < TOL);
        assert!(((-a).degrees_per_second() + 3.0).abs() < TOL);
    }

    #[test]
    fn test_sign_and_abs() {
        let a = AngularRate::from_degrees_per_second(-3.0);
        assert!((a.abs().degrees_per_second() - 3.0).abs() < TOL);
        assert!((a.sign(1.0).degrees_per_second() - 3.0).abs() < TOL);
        assert!((a.sign(-0.1).degrees_per_second() + 3.0).abs() < TOL);
        assert!((a.sign(0.0).degrees_per_second() - 3.0).abs() < TOL);
    }

    #[test]
    fn test_comparisons_across_units() {
        let slow = AngularRate::from_degrees_per_second(1.0);
        let fast = AngularRate::with_unit(AngularRateUnit::ArcMinutePerSec, 120.0);
        assert!(slow < fast);
        assert!(fast > slow);
        assert!(slow == slow.to_radian());
        assert!(slow != fast);
    }

    #[test]
    fn test_unit_names() {
        for unit in AngularRateUnit::ALL {
            assert_eq!(unit.as_str().parse::<AngularRateUnit>().unwrap(), unit);
            assert_eq!(AngularRateUnit::from(unit.angle_unit()), unit);
        }
        assert!("deg/min".parse::<AngularRateUnit>().is_err());
        assert_eq!(
            AngularRate::from_degrees_per_second(2.5).to_string(),
            "2.5 deg/sec"
        );
    }
}
