//! Error types for angle algebra and axis tracking.
//!
//! This module provides a unified error type [`AstroError`] covering the few
//! operations in this workspace that can fail: sexagesimal parsing, angle
//! division, unit-name parsing, finite-value checks, and configuration
//! validation. Everything else (conversions, comparisons, filter updates) is
//! total and lets NaN/Inf propagate.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MalformedSexagesimal`](AstroError::MalformedSexagesimal) | Wrong number of `:`-separated fields |
//! | [`InvalidNumericField`](AstroError::InvalidNumericField) | A sexagesimal field is not a number |
//! | [`MathError`](AstroError::MathError) | Division by zero, non-finite values |
//! | [`UnknownUnit`](AstroError::UnknownUnit) | Unrecognised unit name |
//! | [`InvalidConfig`](AstroError::InvalidConfig) | Rejected axis configuration |
//!
//! None of these are retried internally; recovery belongs to the caller.
//!
//! ```
//! use celestial_units::{AstroError, MathErrorKind};
//!
//! fn safe_divide(a: f64, b: f64) -> Result<f64, AstroError> {
//!     if b == 0.0 {
//!         return Err(AstroError::math_error(
//!             "safe_divide",
//!             MathErrorKind::DivisionByZero,
//!             "divisor is zero",
//!         ));
//!     }
//!     Ok(a / b)
//! }
//! ```

use std::num::ParseFloatError;
use thiserror::Error;

/// Classification of mathematical errors.
///
/// Used with [`AstroError::MathError`] to distinguish numerical failure modes.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Attempted division by zero.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Value is NaN or infinity.
    NotFinite,
    /// Value outside the valid domain.
    OutOfRange,
}

/// Unified error type for the angle and axis crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// The input did not split into exactly three `:`-separated fields.
    #[error("Malformed sexagesimal '{input}': expected 3 ':'-separated fields, found {found}")]
    MalformedSexagesimal { input: String, found: usize },

    /// One of the three sexagesimal fields is not a number.
    #[error("Invalid numeric field '{field}' in '{input}': {source}")]
    InvalidNumericField {
        input: String,
        field: String,
        source: ParseFloatError,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// A unit name that none of the unit enums recognise.
    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),

    /// A configuration value that would make a filter or tracker meaningless.
    #[error("Invalid configuration for {parameter}: {message}")]
    InvalidConfig { parameter: String, message: String },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MalformedSexagesimal`](Self::MalformedSexagesimal) error.
    pub fn malformed_sexagesimal(input: &str, found: usize) -> Self {
        Self::MalformedSexagesimal {
            input: input.to_string(),
            found,
        }
    }

    /// Creates an [`InvalidNumericField`](Self::InvalidNumericField) error.
    pub fn invalid_numeric_field(input: &str, field: &str, source: ParseFloatError) -> Self {
        Self::InvalidNumericField {
            input: input.to_string(),
            field: field.to_string(),
            source,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`UnknownUnit`](Self::UnknownUnit) error.
    pub fn unknown_unit(name: &str) -> Self {
        Self::UnknownUnit(name.to_string())
    }

    /// Creates an [`InvalidConfig`](Self::InvalidConfig) error.
    pub fn invalid_config(parameter: &str, reason: &str) -> Self {
        Self::InvalidConfig {
            parameter: parameter.to_string(),
            message: reason.to_string(),
        }
    }
}
