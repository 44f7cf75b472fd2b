//! Sexagesimal (base-60) angle notation.
//!
//! Two triples are supported:
//!
//! - [`Hms`]: hours, minutes, seconds. 1 hour = 15 degrees.
//! - [`Dms`]: degrees, arcminutes, arcseconds.
//!
//! # Text Format
//!
//! Both parse from and format to the same colon notation:
//!
//! ```text
//! Input:   [+-]DD:MM:SS[.sss]      e.g. -65:34:37.9, +0:0:00.0032
//! Output:  [-]DD:MM:SS.SSSS        e.g. -65:34:37.9000
//! ```
//!
//! The whole-unit and minute fields print as zero-padded integers at least two
//! digits wide, the seconds as a zero-padded float with four decimals.
//!
//! # Sign Convention
//!
//! The sign belongs to the whole triple. A leading `+` or `-` on the first
//! field applies to all three fields, and on conversion to an [`Angle`] a
//! negative value in *any* field makes the whole magnitude negative:
//!
//! ```
//! use celestial_units::Dms;
//!
//! let d = Dms { degree: -1.0, minute: 30.0, second: 0.0 };
//! assert!((d.to_angle().degrees() + 1.5).abs() < 1e-12);  // -1.5, not -0.5
//! ```
//!
//! # Parsing
//!
//! ```
//! use celestial_units::{Angle, Hms};
//!
//! let hms: Hms = "-01:02:03.123".parse().unwrap();
//! assert_eq!(hms.hour, -1.0);
//! assert_eq!(hms.minute, -2.0);
//! assert_eq!(hms.second, -3.123);
//!
//! let ra = Angle::from_hms_str("12:00:00").unwrap();
//! assert!((ra.degrees() - 180.0).abs() < 1e-12);
//! ```
//!
//! # Formatting
//!
//! ```
//! use celestial_units::angle::arcsec;
//!
//! assert_eq!(arcsec(66.0).sexagesimal_dms(), "00:01:06.0000");
//! assert_eq!(arcsec(-66.0).sexagesimal_hms(), "-00:00:04.4000");
//! ```

use core::fmt;
use core::str::FromStr;

use super::core::Angle;
use crate::constants::{
    DEGREE_PER_HOUR, MINUTE_PER_HOUR, RADIAN_PER_ARCMINUTE, RADIAN_PER_ARCSECOND,
    RADIAN_PER_DEGREE, SECOND_PER_HOUR, SEXAGESIMAL_MINUTES_PER_UNIT,
    SEXAGESIMAL_SECONDS_PER_MINUTE, SEXAGESIMAL_SECONDS_PER_UNIT,
};
use crate::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hours, minutes and seconds.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hms {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Degrees, arcminutes and arcseconds.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    pub degree: f64,
    pub minute: f64,
    pub second: f64,
}

/// Splits `s` into three signed fields.
///
/// The optional sign on the first field multiplies all three.
fn parse_sexagesimal(s: &str) -> AstroResult<(f64, f64, f64)> {
    let tokens: Vec<&str> = s.split(':').collect();
    if tokens.len() != 3 {
        return Err(AstroError::malformed_sexagesimal(s, tokens.len()));
    }

    let (sign, lead) = if let Some(rest) = tokens[0].strip_prefix('+') {
        (1.0, rest)
    } else if let Some(rest) = tokens[0].strip_prefix('-') {
        (-1.0, rest)
    } else {
        (1.0, tokens[0])
    };

    let field = |t: &str| {
        t.parse::<f64>()
            .map_err(|e| AstroError::invalid_numeric_field(s, t, e))
    };

    Ok((
        sign * field(lead)?,
        sign * field(tokens[1])?,
        sign * field(tokens[2])?,
    ))
}

#[inline]
fn any_negative(a: f64, b: f64, c: f64) -> bool {
    a < 0.0 || b < 0.0 || c < 0.0
}

/// Writes `[-]AA:BB:CC.CCCC`. Integer fields are truncated.
fn write_triple(f: &mut fmt::Formatter<'_>, whole: f64, minute: f64, second: f64) -> fmt::Result {
    if any_negative(whole, minute, second) {
        write!(
            f,
            "-{:02}:{:02}:{:07.4}",
            whole.abs() as i64,
            minute.abs() as i64,
            second.abs()
        )
    } else {
        write!(f, "{:02}:{:02}:{:07.4}", whole as i64, minute as i64, second)
    }
}

/// Splits a decimal value of hours or degrees into truncated whole units,
/// truncated minutes and the residual seconds.
fn split_sexagesimal(value: f64) -> (f64, f64, f64) {
    let whole = libm::trunc(value);
    let fraction = value - whole;
    let minute = libm::trunc(fraction * SEXAGESIMAL_MINUTES_PER_UNIT);
    let second =
        fraction * SEXAGESIMAL_SECONDS_PER_UNIT - minute * SEXAGESIMAL_SECONDS_PER_MINUTE;
    (whole, minute, second)
}

impl Hms {
    /// Parses `[+-]HH:MM:SS[.sss]`.
    ///
    /// # Errors
    ///
    /// - [`AstroError::MalformedSexagesimal`] unless there are exactly three fields
    /// - [`AstroError::InvalidNumericField`] if a field is not a number
    pub fn parse(s: &str) -> AstroResult<Self> {
        let (hour, minute, second) = parse_sexagesimal(s)?;
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// True when any field is negative, i.e. the whole triple is negative.
    pub fn is_negative(&self) -> bool {
        any_negative(self.hour, self.minute, self.second)
    }

    /// Converts to a radian-unit [`Angle`], applying the whole-triple sign rule.
    pub fn to_angle(&self) -> Angle {
        let rad_per_hour = DEGREE_PER_HOUR * RADIAN_PER_DEGREE;
        if self.is_negative() {
            let hours = self.hour.abs()
                + self.minute.abs() / MINUTE_PER_HOUR
                + self.second.abs() / SECOND_PER_HOUR;
            Angle::from_radians(-hours * rad_per_hour)
        } else {
            let hours = self.hour + self.minute / MINUTE_PER_HOUR + self.second / SECOND_PER_HOUR;
            Angle::from_radians(hours * rad_per_hour)
        }
    }

    pub fn to_dms(&self) -> Dms {
        self.to_angle().to_dms()
    }
}

impl Dms {
    /// Parses `[+-]DD:MM:SS[.sss]`.
    ///
    /// # Errors
    ///
    /// - [`AstroError::MalformedSexagesimal`] unless there are exactly three fields
    /// - [`AstroError::InvalidNumericField`] if a field is not a number
    pub fn parse(s: &str) -> AstroResult<Self> {
        let (degree, minute, second) = parse_sexagesimal(s)?;
        Ok(Self {
            degree,
            minute,
            second,
        })
    }

    /// True when any field is negative, i.e. the whole triple is negative.
    pub fn is_negative(&self) -> bool {
        any_negative(self.degree, self.minute, self.second)
    }

    /// Converts to a radian-unit [`Angle`], applying the whole-triple sign rule.
    pub fn to_angle(&self) -> Angle {
        if self.is_negative() {
            Angle::from_radians(
                -(self.degree.abs() * RADIAN_PER_DEGREE
                    + self.minute.abs() * RADIAN_PER_ARCMINUTE
                    + self.second.abs() * RADIAN_PER_ARCSECOND),
            )
        } else {
            Angle::from_radians(
                self.degree * RADIAN_PER_DEGREE
                    + self.minute * RADIAN_PER_ARCMINUTE
                    + self.second * RADIAN_PER_ARCSECOND,
            )
        }
    }

    pub fn to_hms(&self) -> Hms {
        self.to_angle().to_hms()
    }
}

impl Angle {
    /// Decomposes into hours, minutes and seconds.
    ///
    /// Hours and minutes are truncated toward zero, so a negative angle yields
    /// fields that are all non-positive. No NaN/Inf checks.
    pub fn to_hms(self) -> Hms {
        let (hour, minute, second) = split_sexagesimal(self.hours());
        Hms {
            hour,
            minute,
            second,
        }
    }

    /// Decomposes into degrees, arcminutes and arcseconds. No NaN/Inf checks.
    pub fn to_dms(self) -> Dms {
        let (degree, minute, second) = split_sexagesimal(self.degrees());
        Dms {
            degree,
            minute,
            second,
        }
    }

    /// Parses `[+-]HH:MM:SS[.sss]` into a radian-unit angle.
    pub fn from_hms_str(s: &str) -> AstroResult<Self> {
        Hms::parse(s).map(|hms| hms.to_angle())
    }

    /// Parses `[+-]DD:MM:SS[.sss]` into a radian-unit angle.
    pub fn from_dms_str(s: &str) -> AstroResult<Self> {
        Dms::parse(s).map(|dms| dms.to_angle())
    }

    /// Formats as `[-]HH:MM:SS.SSSS`.
    pub fn sexagesimal_hms(self) -> String {
        self.to_hms().to_string()
    }

    /// Formats as `[-]DD:MM:SS.SSSS`.
    pub fn sexagesimal_dms(self) -> String {
        self.to_dms().to_string()
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.hour, self.minute, self.second)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_triple(f, self.degree, self.minute, self.second)
    }
}

impl FromStr for Hms {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        Hms::parse(s)
    }
}

impl FromStr for Dms {
    type Err = AstroError;

    fn from_str(s: &str) -> AstroResult<Self> {
        Dms::parse(s)
    }
}

impl From<Hms> for Angle {
    fn from(hms: Hms) -> Self {
        hms.to_angle()
    }
}

impl From<Dms> for Angle {
    fn from(dms: Dms) -> Self {
        dms.to_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{arcmin, arcsec, deg, hours, rad};
    use crate::constants::PI;
    use crate::AngleUnit;

    const EPSILON: f64 = 1e-9;

    fn dms(degree: f64, minute: f64, second: f64) -> Dms {
        Dms {
            degree,
            minute,
            second,
        }
    }

    fn hms(hour: f64, minute: f64, second: f64) -> Hms {
        Hms {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn test_parse_signed_fields() {
        for s in ["01:02:03.123", "+01:02:03.123"] {
            let h = Hms::parse(s).unwrap();
            assert_eq!((h.hour, h.minute, h.second), (1.0, 2.0, 3.123));
            let d = Dms::parse(s).unwrap();
            assert_eq!((d.degree, d.minute, d.second), (1.0, 2.0, 3.123));
        }

        let h = Hms::parse("-01:02:03.123").unwrap();
        assert_eq!((h.hour, h.minute, h.second), (-1.0, -2.0, -3.123));
        let d = Dms::parse("-01:02:03.123").unwrap();
        assert_eq!((d.degree, d.minute, d.second), (-1.0, -2.0, -3.123));
    }

    #[test]
    fn test_parse_negative_zero_lead() {
        let d = Dms::parse("-0:30:00").unwrap();
        assert!(d.is_negative());
        assert!((d.to_angle().degrees() + 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        for (s, found) in [("12:34", 2), ("1:2:3:4", 4), ("", 1), ("12", 1)] {
            match Hms::parse(s) {
                Err(AstroError::MalformedSexagesimal { found: f, .. }) => assert_eq!(f, found),
                other => panic!("expected MalformedSexagesimal for {s:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_non_numeric_field() {
        for (s, bad) in [("ab:02:03", "ab"), ("01:x:03", "x"), ("-:02:03", ""), ("1:2:", "")] {
            match Dms::parse(s) {
                Err(AstroError::InvalidNumericField { field, .. }) => assert_eq!(field, bad),
                other => panic!("expected InvalidNumericField for {s:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_dms_to_angle() {
        let cases = [
            (dms(1.0, 1.0, 1.1), 0.017749513679101225),
            (dms(-1.0, -1.0, -1.1), -0.017749513679101225),
            (dms(-1.0, 1.0, 1.1), -0.017749513679101225),
            (dms(1.0, 90.0, 1.1), 0.04363856425035044),
        ];
        for (input, expected) in cases {
            let a = input.to_angle();
            assert_eq!(a.unit(), AngleUnit::Radian);
            assert!((a.radians() - expected).abs() < 1e-15, "{input:?}");
        }
        assert!((dms(1.0, 1.0, 1.1).to_angle().degrees() - 1.0169722222222224).abs() < 1e-12);
    }

    #[test]
    fn test_hms_to_angle() {
        let cases = [
            (hms(12.0, 1.0, 1.1), 3.1460359709771626),
            (hms(-12.0, -1.0, -1.1), -3.1460359709771626),
            (hms(-12.0, 1.0, 1.1), -3.1460359709771626),
            (hms(11.0, 90.0, 1.1), 3.2725723417467516),
        ];
        for (input, expected) in cases {
            let a = input.to_angle();
            assert_eq!(a.unit(), AngleUnit::Radian);
            assert!((a.radians() - expected).abs() < 1e-14, "{input:?}");
        }
    }

    #[test]
    fn test_dms_to_hms() {
        let cases = [
            (dms(15.0, 1.0, 1.1), hms(1.0, 0.0, 4.07333333333364)),
            (dms(-15.0, -1.0, -1.1), hms(-1.0, 0.0, -4.07333333333364)),
            (dms(-15.0, 1.0, 1.1), hms(-1.0, 0.0, -4.07333333333364)),
            (dms(14.0, 90.0, 1.1), hms(1.0, 2.0, 0.07333333333338032)),
            (dms(-14.0, 90.0, 1.1), hms(-1.0, -2.0, -0.07333333333338032)),
        ];
        for (input, expected) in cases {
            let got = input.to_hms();
            assert_eq!(got.hour, expected.hour, "{input:?}");
            assert_eq!(got.minute, expected.minute, "{input:?}");
            assert!((got.second - expected.second).abs() < EPSILON, "{input:?}");
        }
    }

    #[test]
    fn test_hms_to_dms() {
        let cases = [
            (hms(12.0, 1.0, 1.1), dms(180.0, 15.0, 16.50000000008731)),
            (hms(-12.0, -1.0, -1.1), dms(-180.0, -15.0, -16.50000000008731)),
            (hms(-12.0, 1.0, 1.1), dms(-180.0, -15.0, -16.50000000008731)),
            (hms(11.0, 90.0, 1.1), dms(187.0, 30.0, 16.50000000008731)),
            (hms(-11.0, 90.0, 1.1), dms(-187.0, -30.0, -16.50000000008731)),
        ];
        for (input, expected) in cases {
            let got = input.to_dms();
            assert_eq!(got.degree, expected.degree, "{input:?}");
            assert_eq!(got.minute, expected.minute, "{input:?}");
            assert!((got.second - expected.second).abs() < EPSILON, "{input:?}");
        }
    }

    #[test]
    fn test_sexagesimal_dms_format() {
        let cases = [
            (rad(PI), "180:00:00.0000"),
            (deg(180.0), "180:00:00.0000"),
            (hours(12.0), "180:00:00.0000"),
            (Angle::from_milliradians(1.1), "00:03:46.8913"),
            (Angle::from_milliradians(-1.1), "-00:03:46.8913"),
            (arcmin(1.1), "00:01:06.0000"),
            (arcmin(-1.1), "-00:01:06.0000"),
            (arcsec(66.0), "00:01:06.0000"),
            (arcsec(-66.0), "-00:01:06.0000"),
        ];
        for (input, expected) in cases {
            assert_eq!(input.sexagesimal_dms(), expected, "{input}");
        }
    }

    #[test]
    fn test_sexagesimal_hms_format() {
        let cases = [
            (rad(PI), "12:00:00.0000"),
            (deg(180.0), "12:00:00.0000"),
            (hours(12.0), "12:00:00.0000"),
            (Angle::from_milliradians(1.1), "00:00:15.1261"),
            (Angle::from_milliradians(-1.1), "-00:00:15.1261"),
            (arcmin(1.1), "00:00:04.4000"),
            (arcmin(-1.1), "-00:00:04.4000"),
            (arcsec(66.0), "00:00:04.4000"),
            (arcsec(-66.0), "-00:00:04.4000"),
        ];
        for (input, expected) in cases {
            assert_eq!(input.sexagesimal_hms(), expected, "{input}");
        }
    }

    #[test]
    fn test_split_is_the_same_for_degrees_and_hours() {
        let (whole, minute, second) = split_sexagesimal(-12.5125);
        assert_eq!((whole, minute), (-12.0, -30.0));
        assert!((second + 45.0).abs() < 1e-6);

        let d = deg(12.5125).to_dms();
        let h = hours(12.5125).to_hms();
        assert_eq!((d.degree, d.minute), (h.hour, h.minute));
        assert!((d.second - h.second).abs() < 1e-6);
        assert!((d.second - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_display_uses_absolute_digits() {
        assert_eq!(dms(1.0, 1.0, 1.1).to_string(), "01:01:01.1000");
        assert_eq!(dms(-1.0, 1.0, 1.1).to_string(), "-01:01:01.1000");
        assert_eq!(hms(0.0, 0.0, -0.5).to_string(), "-00:00:00.5000");
    }

    #[test]
    fn test_string_round_trip() {
        let cases = [
            ("-65:34:37.9", "-65:34:37.9000"),
            ("01:02:03.123", "01:02:03.1230"),
            ("+10:20:30", "10:20:30.0000"),
        ];
        for (input, expected) in cases {
            let dms_angle = Angle::from_dms_str(input).unwrap();
            assert_eq!(dms_angle.sexagesimal_dms(), expected);
            let hms_angle = Angle::from_hms_str(input).unwrap();
            assert_eq!(hms_angle.sexagesimal_hms(), expected);
        }
    }

    #[test]
    fn test_from_conversions() {
        let a: Angle = hms(6.0, 0.0, 0.0).into();
        assert!((a.degrees() - 90.0).abs() < EPSILON);
        let b: Angle = dms(45.0, 30.0, 0.0).into();
        assert!((b.degrees() - 45.5).abs() < EPSILON);
    }
}
