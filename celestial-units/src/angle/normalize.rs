//! Periodic reduction helpers.
//!
//! All helpers reduce into the half-open range `[0, n)`:
//!
//! | Function | Range | Typical input |
//! |----------|-------|---------------|
//! | [`modulo_24`] | [0, 24) | hours |
//! | [`modulo_360`] | [0, 360) | degrees |
//! | [`modulo_2pi`] | [0°, 360°) | [`Angle`] (returned in degrees) |
//! | [`modulo_n`] | [0, n) | anything; returns a reducer closure |
//!
//! [`modulo_n`] produces exactly the kind of reducer accepted by
//! [`Angle::add_modulo`] and [`Angle::sub_modulo`]. Those apply the reducer to
//! a radian value, so pass `modulo_n(TWOPI)` there, not `modulo_360`.
//!
//! ```
//! use celestial_units::{modulo_24, modulo_360, modulo_n};
//!
//! assert_eq!(modulo_24(25.0), 1.0);
//! assert_eq!(modulo_360(-1.0), 359.0);
//!
//! let m = modulo_n(1440.0);
//! assert_eq!(m(-1.0), 1439.0);
//! ```
//!
//! # Algorithm Notes
//!
//! Reduction uses `libm::fmod` and then shifts negative remainders up by one
//! period. A remainder that rounds to exactly `n` after the shift (tiny
//! negative inputs) is folded back to zero so the upper bound stays open.
//! NaN and infinities produce NaN; no checks are made.

use super::core::Angle;
use crate::constants::{DEGREE_PER_REVOLUTION, HOURS_PER_DAY};

#[inline]
fn wrap_0_n(v: f64, n: f64) -> f64 {
    let mut w = libm::fmod(v, n);
    if w < 0.0 {
        w += n;
    }
    if w >= n {
        w -= n;
    }
    w
}

/// Reduces hours into `[0, 24)`.
#[inline]
pub fn modulo_24(hours: f64) -> f64 {
    wrap_0_n(hours, HOURS_PER_DAY)
}

/// Reduces degrees into `[0, 360)`.
#[inline]
pub fn modulo_360(degrees: f64) -> f64 {
    wrap_0_n(degrees, DEGREE_PER_REVOLUTION)
}

/// Reduces an angle into `[0°, 360°)`, returned as a degree-unit angle.
#[inline]
pub fn modulo_2pi(a: Angle) -> Angle {
    Angle::from_degrees(modulo_360(a.degrees()))
}

/// Returns a reducer into `[0, n)` suitable for [`Angle::add_modulo`].
pub fn modulo_n(n: f64) -> impl Fn(f64) -> f64 {
    move |v| wrap_0_n(v, n)
}
