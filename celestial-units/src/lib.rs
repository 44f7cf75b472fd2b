//! Unit-tagged angles and angular rates for rotating-axis control.
//!
//! `celestial-units` is the value layer underneath the axis tracking in
//! `celestial-axis`: it keeps every angle tagged with the unit it was given
//! in, converts between units on demand, and reads and writes sexagesimal
//! notation.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], [`AngleUnit`], arithmetic, HMS/DMS, periodic reduction, finite checks |
//! | [`coord`] | [`AngleCoord`] pairs (az/el, ra/dec, lat/lon) and [`AngleCoordEpoch`] |
//! | [`rate`] | [`AngularRate`] and [`AngularRateUnit`] (per-second rates) |
//! | [`time`] | Signed elapsed seconds and polling-boundary phase |
//! | [`constants`] | Unit conversion factors |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Re-exports
//!
//! ```
//! use celestial_units::{Angle, AngleUnit, AngularRate, AngularRateUnit, Dms, Hms};
//! use celestial_units::{AstroError, AstroResult, MathErrorKind};
//! ```
//!
//! # Design Notes
//!
//! - **Radians as the pivot**: every conversion goes `unit → radian → unit`,
//!   with fixed factors (π/180 per degree, 15° per hour, 60′ per degree,
//!   3600″ per degree, 1000 mas per arcsecond, 1000 mrad per radian).
//!
//! - **Total by default**: conversions, arithmetic and comparisons never fail
//!   and never check for NaN or infinities. Use [`check_finite`] where input
//!   crosses a trust boundary.
//!
//! - **Degrees for comparison**: `==`, `<`, `>` compare in degrees with exact
//!   float equality.

pub mod angle;
pub mod constants;
pub mod coord;
pub mod errors;
pub mod rate;
pub mod time;

pub use angle::{
    check_finite, modulo_24, modulo_2pi, modulo_360, modulo_n, validate_finite_angle, Angle,
    AngleUnit, Dms, Hms,
};
pub use coord::{AngleCoord, AngleCoordEpoch};
pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use rate::{AngularRate, AngularRateUnit};
pub use time::{elapsed_seconds, seconds_after_boundary};

pub mod test_helpers;
