//! Core unit-tagged angle type.
//!
//! [`Angle`] keeps the value exactly as it was given together with the unit it
//! was given in. Nothing is converted at construction time; conversions happen
//! on demand and always pass through radians, so there is exactly one
//! conversion path between any two units.
//!
//! # Quick Start
//!
//! ```
//! use celestial_units::{Angle, AngleUnit};
//!
//! let az = Angle::new(AngleUnit::Degree, 180.0);
//! assert_eq!(az.unit(), AngleUnit::Degree);
//! assert_eq!(az.value(), 180.0);
//!
//! let hours = az.to_hour();
//! assert_eq!(hours.unit(), AngleUnit::Hour);
//! assert!((hours.value() - 12.0).abs() < 1e-12);
//! ```
//!
//! # Comparisons
//!
//! `==`, `<`, `>` and friends convert both sides to degrees first and then
//! compare the raw floats. Equality is exact: two angles reached through
//! different conversion paths can compare unequal by one ULP.
//!
//! ```
//! use celestial_units::angle::{deg, hours};
//!
//! assert!(deg(180.0) == hours(12.0));
//! assert!(deg(10.0) < hours(1.0));
//! ```
//!
//! # Arithmetic
//!
//! Arithmetic normalizes every operand to radians and returns a radian-unit
//! angle:
//!
//! ```
//! use celestial_units::{Angle, AngleUnit};
//! use celestial_units::angle::{deg, arcmin};
//!
//! let sum = deg(1.0) + arcmin(30.0);
//! assert_eq!(sum.unit(), AngleUnit::Radian);
//! assert!((sum.degrees() - 1.5).abs() < 1e-12);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::constants::{
    ARCMINUTE_PER_DEGREE, ARCSECOND_PER_DEGREE, DEGREE_PER_HOUR, MILLIARCSECOND_PER_ARCSECOND,
    MILLIARCSECOND_PER_DEGREE, MILLIRADIAN_PER_RADIAN, RADIAN_PER_DEGREE,
};
use crate::{AstroError, AstroResult, MathErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit an [`Angle`] value is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AngleUnit {
    /// Canonical unit; every conversion passes through it.
    #[default]
    Radian,
    Degree,
    MilliRadian,
    ArcMinute,
    ArcSecond,
    MilliArcSecond,
    /// 1 hour = 15 degrees.
    Hour,
}

impl AngleUnit {
    /// All units, in declaration order.
    pub const ALL: [AngleUnit; 7] = [
        AngleUnit::Radian,
        AngleUnit::Degree,
        AngleUnit::MilliRadian,
        AngleUnit::ArcMinute,
        AngleUnit::ArcSecond,
        AngleUnit::MilliArcSecond,
        AngleUnit::Hour,
    ];

    /// Short unit name: `rad`, `deg`, `mrad`, `arcmin`, `arcsec`, `mas` or `hr`.
    pub fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Radian => "rad",
            AngleUnit::Degree => "deg",
            AngleUnit::MilliRadian => "mrad",
            AngleUnit::ArcMinute => "arcmin",
            AngleUnit::ArcSecond => "arcsec",
            AngleUnit::MilliArcSecond => "mas",
            AngleUnit::Hour => "hr",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleUnit {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        AngleUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s.trim())
            .ok_or_else(|| AstroError::unknown_unit(s))
    }
}

/// An angular value tagged with its unit.
///
/// `Angle` is an immutable `Copy` value: every conversion and arithmetic
/// operation returns a new instance. No validation happens anywhere; NaN and
/// infinities pass straight through.
///
/// # Derives
///
/// `PartialEq` and `PartialOrd` are implemented by hand so that the
/// comparison happens in degrees regardless of the stored unit.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    unit: AngleUnit,
    value: f64,
}

impl Angle {
    /// Zero radians.
    pub const ZERO: Self = Self {
        unit: AngleUnit::Radian,
        value: 0.0,
    };

    /// Creates an angle of `value` expressed in `unit`. No validation.
    #[inline]
    pub const fn new(unit: AngleUnit, value: f64) -> Self {
        Self { unit, value }
    }

    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self::new(AngleUnit::Radian, rad)
    }

    #[inline]
    pub const fn from_degrees(deg: f64) -> Self {
        Self::new(AngleUnit::Degree, deg)
    }

    #[inline]
    pub const fn from_milliradians(mrad: f64) -> Self {
        Self::new(AngleUnit::MilliRadian, mrad)
    }

    #[inline]
    pub const fn from_arcminutes(arcmin: f64) -> Self {
        Self::new(AngleUnit::ArcMinute, arcmin)
    }

    #[inline]
    pub const fn from_arcseconds(arcsec: f64) -> Self {
        Self::new(AngleUnit::ArcSecond, arcsec)
    }

    #[inline]
    pub const fn from_milliarcseconds(mas: f64) -> Self {
        Self::new(AngleUnit::MilliArcSecond, mas)
    }

    /// Creates an angle from hours (1h = 15 degrees).
    #[inline]
    pub const fn from_hours(h: f64) -> Self {
        Self::new(AngleUnit::Hour, h)
    }

    /// The raw value, interpreted under [`unit`](Self::unit).
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(self) -> AngleUnit {
        self.unit
    }

    /// Short name of the stored unit.
    #[inline]
    pub fn unit_str(self) -> &'static str {
        self.unit.as_str()
    }

    /// Converts to radians. This is the only place unit factors are applied
    /// on the way in.
    pub fn to_radian(self) -> Self {
        let v = self.value;
        let rad = match self.unit {
            AngleUnit::Radian => v,
            AngleUnit::MilliRadian => v / MILLIRADIAN_PER_RADIAN,
            AngleUnit::Degree => v * RADIAN_PER_DEGREE,
            AngleUnit::ArcMinute => v / ARCMINUTE_PER_DEGREE * RADIAN_PER_DEGREE,
            AngleUnit::ArcSecond => v / ARCSECOND_PER_DEGREE * RADIAN_PER_DEGREE,
            AngleUnit::MilliArcSecond => {
                v / ARCSECOND_PER_DEGREE * RADIAN_PER_DEGREE / MILLIARCSECOND_PER_ARCSECOND
            }
            AngleUnit::Hour => v * DEGREE_PER_HOUR * RADIAN_PER_DEGREE,
        };
        Self::from_radians(rad)
    }

    pub fn to_milliradian(self) -> Self {
        Self::new(
            AngleUnit::MilliRadian,
            self.to_radian().value * MILLIRADIAN_PER_RADIAN,
        )
    }

    pub fn to_degree(self) -> Self {
        Self::from_degrees(self.to_radian().value / RADIAN_PER_DEGREE)
    }

    pub fn to_hour(self) -> Self {
        Self::from_hours(self.to_degree().value / DEGREE_PER_HOUR)
    }

    pub fn to_arcminute(self) -> Self {
        Self::new(
            AngleUnit::ArcMinute,
            self.to_degree().value * ARCMINUTE_PER_DEGREE,
        )
    }

    pub fn to_arcsecond(self) -> Self {
        Self::new(
            AngleUnit::ArcSecond,
            self.to_degree().value * ARCSECOND_PER_DEGREE,
        )
    }

    pub fn to_milliarcsecond(self) -> Self {
        Self::new(
            AngleUnit::MilliArcSecond,
            self.to_degree().value * MILLIARCSECOND_PER_DEGREE,
        )
    }

    /// Converts to an arbitrary unit.
    pub fn to(self, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Radian => self.to_radian(),
            AngleUnit::Degree => self.to_degree(),
            AngleUnit::MilliRadian => self.to_milliradian(),
            AngleUnit::ArcMinute => self.to_arcminute(),
            AngleUnit::ArcSecond => self.to_arcsecond(),
            AngleUnit::MilliArcSecond => self.to_milliarcsecond(),
            AngleUnit::Hour => self.to_hour(),
        }
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.to_radian().value
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.to_degree().value
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.to_hour().value
    }

    #[inline]
    pub fn arcminutes(self) -> f64 {
        self.to_arcminute().value
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.to_arcsecond().value
    }

    /// Multiplies by a dimensionless factor.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::from_radians(self.radians() * factor)
    }

    /// Divides by a dimensionless divisor.
    ///
    /// # Errors
    ///
    /// Returns a [`MathErrorKind::DivisionByZero`] error when `divisor` is zero.
    ///
    /// ```
    /// use celestial_units::angle::deg;
    ///
    /// assert!((deg(90.0).divide(2.0).unwrap().degrees() - 45.0).abs() < 1e-12);
    /// assert!(deg(90.0).divide(0.0).is_err());
    /// ```
    pub fn divide(self, divisor: f64) -> AstroResult<Self> {
        if divisor == 0.0 {
            return Err(AstroError::math_error(
                "Angle::divide",
                MathErrorKind::DivisionByZero,
                "Cannot divide by zero",
            ));
        }
        Ok(Self::from_radians(self.radians() / divisor))
    }

    /// Dimensionless ratio `self / other`. No zero check.
    #[inline]
    pub fn ratio(self, other: Angle) -> f64 {
        self.radians() / other.radians()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.radians().abs())
    }

    /// Returns `|self|` carrying the sign of `sign`. Only the sign of the
    /// argument matters; zero counts as positive.
    #[inline]
    pub fn sign(self, sign: f64) -> Self {
        let magnitude = self.radians().abs();
        Self::from_radians(if sign < 0.0 { -magnitude } else { magnitude })
    }

    /// Raises the radian value to `exponent`.
    #[inline]
    pub fn pow(self, exponent: f64) -> Self {
        Self::from_radians(self.radians().powf(exponent))
    }

    /// Adds `other`, then applies `reducer` to the radian result.
    ///
    /// `reducer` is meant to be a modulo function but can be any
    /// `f64 -> f64` mapping. `None` leaves the sum unreduced.
    ///
    /// ```
    /// use celestial_units::angle::deg;
    /// use celestial_units::constants::TWOPI;
    /// use celestial_units::modulo_n;
    ///
    /// let wrap = modulo_n(TWOPI);
    /// let sum = deg(350.0).add_modulo(deg(20.0), Some(&wrap));
    /// assert!((sum.degrees() - 10.0).abs() < 1e-9);
    ///
    /// let raw = deg(350.0).add_modulo(deg(20.0), None);
    /// assert!((raw.degrees() - 370.0).abs() < 1e-9);
    /// ```
    pub fn add_modulo(self, other: Angle, reducer: Option<&dyn Fn(f64) -> f64>) -> Self {
        Self::reduce(self.radians() + other.radians(), reducer)
    }

    /// Subtracts `other`, then applies `reducer` to the radian result.
    /// `None` leaves the difference unreduced.
    pub fn sub_modulo(self, other: Angle, reducer: Option<&dyn Fn(f64) -> f64>) -> Self {
        Self::reduce(self.radians() - other.radians(), reducer)
    }

    fn reduce(rad: f64, reducer: Option<&dyn Fn(f64) -> f64>) -> Self {
        match reducer {
            Some(m) => Self::from_radians(m(rad)),
            None => Self::from_radians(rad),
        }
    }

    /// Clamps into `[min, max]` compared in degrees.
    ///
    /// Out-of-range angles are replaced by the limit itself (unit included);
    /// in-range angles are returned untouched. This clamps, it does not wrap.
    pub fn constrain(self, min: Angle, max: Angle) -> Self {
        let d = self.degrees();
        if d > max.degrees() {
            return max;
        }
        if d < min.degrees() {
            return min;
        }
        self
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.radians().tan()
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians().sin_cos()
    }
}

impl PartialEq for Angle {
    /// Exact equality of the degree values.
    fn eq(&self, other: &Self) -> bool {
        self.degrees() == other.degrees()
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.degrees().partial_cmp(&other.degrees())
    }
}

impl fmt::Display for Angle {
    /// Formats as `<value> <unit>`, e.g. `12.5 deg`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Shorthand for [`Angle::from_hours`].
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}

/// Shorthand for [`Angle::from_arcminutes`].
#[inline]
pub fn arcmin(v: f64) -> Angle {
    Angle::from_arcminutes(v)
}

/// Shorthand for [`Angle::from_arcseconds`].
#[inline]
pub fn arcsec(v: f64) -> Angle {
    Angle::from_arcseconds(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_new_keeps_unit_and_value() {
        let cases = [
            (AngleUnit::Radian, 1.1, "rad"),
            (AngleUnit::Hour, 12.1, "hr"),
            (AngleUnit::Degree, 1.2, "deg"),
            (AngleUnit::MilliRadian, 1.3, "mrad"),
            (AngleUnit::ArcMinute, 1.4, "arcmin"),
            (AngleUnit::ArcSecond, 1.5, "arcsec"),
            (AngleUnit::MilliArcSecond, 1.6, "mas"),
        ];
        for (unit, value, name) in cases {
            let a = Angle::new(unit, value);
            assert_eq!(a.unit(), unit);
            assert_eq!(a.value(), value);
            assert_eq!(a.unit_str(), name);
        }
    }

    #[test]
    fn test_to_radian() {
        assert_eq!(Angle::new(AngleUnit::Radian, 1.1).to_radian().value(), 1.1);
        assert_eq!(deg(180.0).to_radian().value(), PI);
        assert_eq!(hours(12.0).to_radian().value(), PI);
        assert!((Angle::from_milliradians(1.1).radians() - 0.0011).abs() < 1e-18);
        assert!((arcmin(1.1).radians() - 0.00031997702953229375).abs() < 1e-18);
        assert!((arcsec(66.0).radians() - 0.00031997702953229375).abs() < 1e-18);
    }

    #[test]
    fn test_to_degree() {
        assert_eq!(rad(PI).to_degree().value(), 180.0);
        assert_eq!(hours(12.0).degrees(), 180.0);
        assert!((Angle::from_milliradians(1.1).degrees() - 0.06302535746439056).abs() < 1e-15);
        assert!((arcmin(-1.1).degrees() + 0.018333333333333333).abs() < 1e-15);
        assert!((arcsec(66.0).degrees() - 0.018333333333333333).abs() < 1e-15);
    }

    #[test]
    fn test_to_other_units() {
        let half_turn = rad(PI);
        assert!((half_turn.to_arcminute().value() - 10800.0).abs() < 1e-9);
        assert!((half_turn.to_arcsecond().value() - 648000.0).abs() < 1e-7);
        assert!((half_turn.to_milliarcsecond().value() - 648000000.0).abs() < 1e-4);
        assert!((half_turn.to_milliradian().value() - 3141.592653589793).abs() < 1e-9);
        assert!((half_turn.to_hour().value() - 12.0).abs() < 1e-12);

        let small = Angle::from_milliradians(1.1);
        assert!((small.to_arcsecond().value() - 226.89128687180602).abs() < 1e-9);
        assert!((small.to_hour().value() - 0.004201690497626037).abs() < 1e-15);
    }

    #[test]
    fn test_to_dispatches_by_unit() {
        let a = deg(45.0);
        for unit in AngleUnit::ALL {
            let converted = a.to(unit);
            assert_eq!(converted.unit(), unit);
            assert!((converted.degrees() - 45.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unit_from_str() {
        for unit in AngleUnit::ALL {
            assert_eq!(unit.as_str().parse::<AngleUnit>().unwrap(), unit);
        }
        assert_eq!(" deg ".parse::<AngleUnit>().unwrap(), AngleUnit::Degree);
        assert!("furlong".parse::<AngleUnit>().is_err());
    }

    #[test]
    fn test_divide() {
        let a = deg(90.0).divide(2.0).unwrap();
        assert_eq!(a.unit(), AngleUnit::Radian);
        assert!((a.degrees() - 45.0).abs() < 1e-12);

        let err = deg(90.0).divide(0.0).unwrap_err();
        assert!(matches!(
            err,
            AstroError::MathError {
                kind: MathErrorKind::DivisionByZero,
                ..
            }
        ));
    }

    #[test]
    fn test_scale_abs_sign_pow() {
        assert!((deg(10.0).scale(3.0).degrees() - 30.0).abs() < 1e-12);
        assert!((deg(-10.0).abs().degrees() - 10.0).abs() < 1e-12);
        assert!((deg(10.0).sign(-0.001).degrees() + 10.0).abs() < 1e-12);
        assert!((deg(-10.0).sign(5.0).degrees() - 10.0).abs() < 1e-12);
        assert!((deg(-10.0).sign(0.0).degrees() - 10.0).abs() < 1e-12);

        assert!((rad(2.0).pow(2.0).radians() - 4.0).abs() < 1e-12);
        assert!((rad(2.0).pow(0.5).radians() - 1.4142135623730951).abs() < 1e-12);
    }

    #[test]
    fn test_ratio() {
        assert!((deg(90.0).ratio(deg(45.0)) - 2.0).abs() < 1e-12);
        assert!((hours(6.0).ratio(deg(180.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_modulo_variants() {
        let halve = |v: f64| v / 2.0;
        let sum = rad(1.0).add_modulo(rad(3.0), Some(&halve));
        assert_eq!(sum.radians(), 2.0);
        let diff = rad(1.0).sub_modulo(rad(3.0), Some(&halve));
        assert_eq!(diff.radians(), -1.0);

        assert_eq!(rad(1.0).add_modulo(rad(3.0), None).radians(), 4.0);
        assert_eq!(rad(1.0).sub_modulo(rad(3.0), None).radians(), -2.0);
    }

    #[test]
    fn test_constrain() {
        let min = deg(-90.0);
        let max = deg(359.0);
        assert_eq!(deg(45.0).constrain(min, max).degrees(), 45.0);
        assert_eq!(deg(360.0).constrain(min, max).degrees(), 359.0);
        assert_eq!(deg(-30.0).constrain(min, max).degrees(), -30.0);
        assert_eq!(deg(-100.0).constrain(min, max).degrees(), -90.0);

        let clamped = hours(23.99).constrain(min, max);
        assert_eq!(clamped.unit(), AngleUnit::Degree);
        assert_eq!(clamped.value(), 359.0);
    }

    #[test]
    fn test_comparisons_in_degrees() {
        assert!(deg(180.0) == rad(PI));
        assert!(hours(1.0) > deg(14.0));
        assert!(arcmin(59.0) < deg(1.0));
        assert!(arcsec(3600.0) >= deg(1.0));
        assert!(deg(1.0) <= arcmin(60.0));
        assert!(deg(f64::NAN) != deg(f64::NAN));
    }

    #[test]
    fn test_trig() {
        let cases = [(0.0, 0.0), (90.0, 1.0), (30.0, 0.5), (-30.0, -0.5)];
        for (d, expected) in cases {
            assert!((deg(d).sin() - expected).abs() < 1e-12);
        }
        assert!((deg(60.0).cos() - 0.5).abs() < 1e-12);
        assert!((deg(45.0).tan() - 1.0).abs() < 1e-12);
        let (s, c) = deg(30.0).sin_cos();
        assert!((s - 0.5).abs() < 1e-12);
        assert!((c - 0.8660254037844386).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(deg(12.5).to_string(), "12.5 deg");
        assert_eq!(Angle::ZERO.to_string(), "0 rad");
    }
}
