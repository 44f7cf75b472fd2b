//! Unit-conversion constants.
//!
//! Every angle conversion is a linear scaling routed through radians using
//! these factors.

#[allow(clippy::approx_constant)]
pub const PI: f64 = core::f64::consts::PI;

pub const TWOPI: f64 = 2.0 * PI;

pub const RADIAN_PER_DEGREE: f64 = PI / 180.0;

pub const RADIAN_PER_ARCMINUTE: f64 = PI / (180.0 * 60.0);

pub const RADIAN_PER_ARCSECOND: f64 = PI / (180.0 * 3600.0);

pub const MILLIRADIAN_PER_RADIAN: f64 = 1000.0;

pub const DEGREE_PER_HOUR: f64 = 15.0;

pub const DEGREE_PER_REVOLUTION: f64 = 360.0;

pub const ARCMINUTE_PER_DEGREE: f64 = 60.0;

pub const ARCSECOND_PER_DEGREE: f64 = 3600.0;

pub const MILLIARCSECOND_PER_ARCSECOND: f64 = 1000.0;

pub const MILLIARCSECOND_PER_DEGREE: f64 = ARCSECOND_PER_DEGREE * MILLIARCSECOND_PER_ARCSECOND;

pub const MINUTE_PER_HOUR: f64 = 60.0;

pub const SECOND_PER_HOUR: f64 = 3600.0;

/// Sexagesimal subdivisions of one whole unit, hour or degree alike.
pub const SEXAGESIMAL_MINUTES_PER_UNIT: f64 = 60.0;

pub const SEXAGESIMAL_SECONDS_PER_UNIT: f64 = 3600.0;

pub const SEXAGESIMAL_SECONDS_PER_MINUTE: f64 = 60.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const NANOSECONDS_PER_SECOND_F64: f64 = 1_000_000_000.0;
