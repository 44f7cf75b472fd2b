//! Opt-in sanity checks.
//!
//! Conversions and filters never check for NaN or infinities. Callers that
//! want to reject bad values at a boundary (configuration, operator input)
//! use these helpers explicitly.

use super::core::Angle;
use crate::{AstroError, AstroResult, MathErrorKind};

/// Returns `value` unchanged if finite; otherwise a [`MathErrorKind::NotFinite`]
/// error naming `context` and which non-finite value was seen.
pub fn check_finite(value: f64, context: &str) -> AstroResult<f64> {
    let what = if value.is_nan() {
        "Value is NaN"
    } else if value == f64::INFINITY {
        "Value is +Inf"
    } else if value == f64::NEG_INFINITY {
        "Value is -Inf"
    } else {
        return Ok(value);
    };

    Err(AstroError::math_error(context, MathErrorKind::NotFinite, what))
}

/// Checks that the stored value of `angle` is finite.
pub fn validate_finite_angle(angle: Angle, context: &str) -> AstroResult<Angle> {
    check_finite(angle.value(), context).map(|_| angle)
}
