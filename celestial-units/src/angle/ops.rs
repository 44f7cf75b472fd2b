//! Arithmetic operators for [`Angle`].
//!
//! Implements `+`, `-`, `* f64` and unary `-`. Every operand is normalized to
//! radians and the result is a radian-unit angle. Division is deliberately not
//! an operator: [`Angle::divide`] reports division by zero instead.

use super::core::Angle;
use core::ops::*;

/// Angle + Angle → Angle (radians)
impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

/// Angle - Angle → Angle (radians)
impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

/// Angle * scalar → Angle (radians)
impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

/// -Angle → Angle (radians)
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        Angle::from_radians(-self.radians())
    }
}
