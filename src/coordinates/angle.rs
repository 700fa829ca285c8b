//! # Angle helpers
//!
//! Degree/radian conversion and range reduction used throughout the solar
//! formulas. Every formula in this crate is written in degrees and converts to
//! radians only at the trigonometric call site, so these helpers sit on the
//! hot path of every calculation.
//!
//! ```rust
//! use solarium::coordinates::angle::{clamp, deg2rad, rad2deg};
//!
//! assert_eq!(clamp(-90.0, 360.0), 270.0);
//! assert!((rad2deg(deg2rad(45.0)) - 45.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};

/// Converts degrees to radians
#[inline]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * DEG2RAD
}

/// Converts radians to degrees
#[inline]
pub fn rad2deg(radians: f64) -> f64 {
    radians * RAD2DEG
}

/// Reduces `n` into `[0, modulus)`
///
/// Same result as `((n % modulus) + modulus) % modulus`: negative inputs wrap
/// around instead of keeping their sign. Values already in range are returned
/// unchanged, so reduction is idempotent. A zero modulus yields NaN.
///
/// # Examples
///
/// ```rust
/// use solarium::coordinates::angle::clamp;
///
/// assert_eq!(clamp(370.0, 360.0), 10.0);
/// assert_eq!(clamp(-1.0, 24.0), 23.0);
/// ```
#[inline]
pub fn clamp(n: f64, modulus: f64) -> f64 {
    let r = n % modulus;
    let r = if r < 0.0 { r + modulus } else { r };
    // Tiny negative remainders round up to the modulus itself
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// Converts a sexagesimal degrees/arcminutes/arcseconds triple to degrees
#[inline]
pub fn arc_to_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 60.0 / 60.0
}

/// Rounds to two decimal places, halves rounding up
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
