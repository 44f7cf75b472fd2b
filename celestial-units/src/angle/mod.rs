mod core;
mod normalize;
mod ops;
mod sexagesimal;
mod validate;

pub use core::{Angle, AngleUnit};
pub use normalize::{modulo_24, modulo_2pi, modulo_360, modulo_n};
pub use sexagesimal::{Dms, Hms};
pub use validate::{check_finite, validate_finite_angle};

pub use core::{arcmin, arcsec, deg, hours, rad};
