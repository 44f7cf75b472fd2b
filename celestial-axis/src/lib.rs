//! Wrap tracking and sample filtering for cable-wrapped rotating axes.
//!
//! An azimuth encoder reports an angle in `[0°, 360°)`, but a cable-wrapped
//! axis can turn several revolutions either way. This crate keeps track of
//! which revolution (wrap plane) the axis is on and picks the plane a new
//! target should be reached on.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`wrap`] | [`map`] an angle onto a plane, pick the [`closest`] plane for a target |
//! | [`counter`] | [`WrapCounter`]: seam-crossing state machine |
//! | [`deglitch`] | [`Deglitch`]: rate-bounded sample filter |
//! | [`median`] | [`MedianFilter`] over `f64`, `i64`, `i32` and [`Angle`](celestial_units::Angle) |
//! | [`potentiometer`] | [`WrapPotentiometer`]: startup wrap count from a voltage |
//! | [`config`] | [`AxisConfig`] |
//! | [`channel`] | [`AxisChannel`]: the above composed for one axis |
//! | [`clock`] | [`Clock`] seam with system and manual clocks |
//!
//! # Threading
//!
//! Everything is synchronous and single-threaded. Each stateful filter owns
//! its state; use one instance per axis.
//!
//! # Logging
//!
//! Uses the `log` facade: `warn` when a sample is deglitched or a seam
//! crossing is ignored, `debug` for accepted crossings and channel updates.
//! No logger is installed here.

pub mod channel;
pub mod clock;
pub mod config;
pub mod counter;
pub mod deglitch;
pub mod median;
pub mod potentiometer;
pub mod wrap;

pub use channel::{startup_wrap_count, AxisChannel, AxisReading};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AxisConfig;
pub use counter::WrapCounter;
pub use deglitch::Deglitch;
pub use median::{MedianFilter, MedianSample};
pub use potentiometer::WrapPotentiometer;
pub use wrap::{closest, map};
