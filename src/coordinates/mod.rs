pub mod angle;

pub use angle::{clamp, deg2rad, rad2deg};

use serde::{Deserialize, Serialize};

/// Apparent geocentric equatorial position of the Sun
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub right_ascension: f64, // Right ascension in hours, [0, 24)
    pub declination: f64,     // Declination in degrees
}

impl SolarPosition {
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        SolarPosition {
            right_ascension,
            declination,
        }
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.right_ascension * 15.0
    }
}

/// Topocentric horizontal coordinates of the Sun for an observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinates {
    pub azimuth: f64,   // Degrees clockwise from north, [0, 360)
    pub elevation: f64, // Refraction-corrected degrees above the horizon
}

impl HorizontalCoordinates {
    pub fn new(azimuth: f64, elevation: f64) -> Self {
        HorizontalCoordinates { azimuth, elevation }
    }

    /// Whether the Sun's centre is above the apparent horizon
    pub fn is_daylight(&self) -> bool {
        self.elevation > 0.0
    }
}
