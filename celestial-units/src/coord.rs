//! Angle pairs.
//!
//! [`AngleCoord`] holds two angles that together locate a direction:
//! azimuth/elevation for a mount, right ascension/declination on the sky, or
//! latitude/longitude for a site. The pair does not remember which frame it
//! is in; the accessors only name the first and second components.
//! [`AngleCoordEpoch`] adds the UTC time the pair refers to.
//!
//! ```
//! use celestial_units::coord::AngleCoord;
//! use celestial_units::AngleUnit;
//!
//! // Right ascension in hours, declination in degrees.
//! let star = AngleCoord::ra_dec_in(AngleUnit::Hour, 6.0, AngleUnit::Degree, -16.7);
//! assert!((star.ra().degrees() - 90.0).abs() < 1e-12);
//! assert_eq!(star.dec().unit(), AngleUnit::Degree);
//! ```

use core::fmt;

use chrono::{DateTime, Utc};

use crate::{Angle, AngleUnit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleCoord {
    first: Angle,
    second: Angle,
}

impl AngleCoord {
    pub const fn new(first: Angle, second: Angle) -> Self {
        Self { first, second }
    }

    pub const fn az_el(az: Angle, el: Angle) -> Self {
        Self::new(az, el)
    }

    /// Azimuth and elevation given as plain values in one unit.
    pub const fn az_el_in(unit: AngleUnit, az: f64, el: f64) -> Self {
        Self::new(Angle::new(unit, az), Angle::new(unit, el))
    }

    pub const fn ra_dec(ra: Angle, dec: Angle) -> Self {
        Self::new(ra, dec)
    }

    /// Right ascension and declination, each in its own unit.
    pub const fn ra_dec_in(ra_unit: AngleUnit, ra: f64, dec_unit: AngleUnit, dec: f64) -> Self {
        Self::new(Angle::new(ra_unit, ra), Angle::new(dec_unit, dec))
    }

    pub const fn lat_lon(lat: Angle, lon: Angle) -> Self {
        Self::new(lat, lon)
    }

    pub const fn lat_lon_in(unit: AngleUnit, lat: f64, lon: f64) -> Self {
        Self::new(Angle::new(unit, lat), Angle::new(unit, lon))
    }

    pub fn first(self) -> Angle {
        self.first
    }

    pub fn second(self) -> Angle {
        self.second
    }

    pub fn az(self) -> Angle {
        self.first
    }

    pub fn el(self) -> Angle {
        self.second
    }

    pub fn ra(self) -> Angle {
        self.first
    }

    pub fn dec(self) -> Angle {
        self.second
    }

    pub fn lat(self) -> Angle {
        self.first
    }

    pub fn lon(self) -> Angle {
        self.second
    }

    /// Both components converted to `unit`.
    pub fn to(self, unit: AngleUnit) -> Self {
        Self::new(self.first.to(unit), self.second.to(unit))
    }

    /// Pins the pair to a UTC time.
    pub fn at(self, epoch: DateTime<Utc>) -> AngleCoordEpoch {
        AngleCoordEpoch::new(self, epoch)
    }
}

impl fmt::Display for AngleCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// An [`AngleCoord`] with the UTC time it refers to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleCoordEpoch {
    pub epoch: DateTime<Utc>,
    pub coord: AngleCoord,
}

impl AngleCoordEpoch {
    pub const fn new(coord: AngleCoord, epoch: DateTime<Utc>) -> Self {
        Self { epoch, coord }
    }

    pub fn az(&self) -> Angle {
        self.coord.az()
    }

    pub fn el(&self) -> Angle {
        self.coord.el()
    }

    pub fn ra(&self) -> Angle {
        self.coord.ra()
    }

    pub fn dec(&self) -> Angle {
        self.coord.dec()
    }
}
