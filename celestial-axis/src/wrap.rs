//! Wrap-plane mapping.
//!
//! A cable-wrapped axis can sit at the same encoder angle on several wrap
//! planes. Plane `wc` covers `[360·wc, 360·(wc+1))` degrees when the encoder
//! angle is in `[0, 360)`.
//!
//! ```
//! use celestial_axis::wrap::{closest, map};
//! use celestial_units::angle::deg;
//!
//! assert!((map(deg(359.9), 1).degrees() - 719.9).abs() < 1e-9);
//! assert!((closest(deg(350.0), deg(45.0), 0, 5).degrees() - 405.0).abs() < 1e-9);
//! ```

use celestial_units::constants::DEGREE_PER_REVOLUTION;
use celestial_units::Angle;

/// Places `angle` on wrap plane `wrap_count`; the result is in degrees.
pub fn map(angle: Angle, wrap_count: i32) -> Angle {
    let mut v = angle.degrees();
    if wrap_count != 0 {
        v += f64::from(wrap_count) * DEGREE_PER_REVOLUTION;
    }
    Angle::from_degrees(v)
}

/// Chooses the image of `desired` on plane `wrap_count` or one of its two
/// neighbours, whichever is nearest to `current`.
///
/// A neighbour that would reach `±max_wrap_count` is replaced by the current
/// plane. On equal distances the current plane wins, then `wrap_count - 1`,
/// then `wrap_count + 1`. A neighbour outside the `i32` range is treated
/// like one at the limit.
pub fn closest(current: Angle, desired: Angle, wrap_count: i32, max_wrap_count: i32) -> Angle {
    let plus_one = match wrap_count.checked_add(1) {
        Some(wc) if wc < max_wrap_count => wc,
        _ => wrap_count,
    };
    let minus_one = match wrap_count.checked_sub(1) {
        Some(wc) if wc > max_wrap_count.saturating_neg() => wc,
        _ => wrap_count,
    };

    let here = current.degrees();
    let distance = |a: Angle| (here - a.degrees()).abs();

    let mut best = map(desired, wrap_count);
    let mut best_distance = distance(best);

    for plane in [minus_one, plus_one] {
        let candidate = map(desired, plane);
        let d = distance(candidate);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }
    best
}
