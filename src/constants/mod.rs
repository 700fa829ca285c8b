//! Constants module for solar geometry calculations

use std::f64::consts::PI;

// Time constants
/// J2000.0 epoch as Julian date (2000-01-01T12:00 UTC)
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Minutes in an hour
pub const HOUR_MIN: f64 = 60.0;
/// Ratio of sidereal to solar time
pub const SIDEREAL_RATE: f64 = 1.002_737_909_25;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Minutes of time per degree of hour angle
pub const MINUTES_PER_DEGREE: f64 = 4.0;

// Physics
/// Newtonian gravitational constant in N·(m/kg)²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

// Earth constants
/// Earth's mass in kg
pub const EARTH_MASS: f64 = 5.972_19e24;
/// Eccentricity of Earth's orbit at J2000
pub const EARTH_J2000_ECCENTRICITY: f64 = 0.016_710_22;
/// Earth's mean motion in radians per year
pub const EARTH_MEAN_MOTION: f64 = 6.283_066_228_785_2;
/// Mean semi-major axis of Earth's orbit in AU
pub const EARTH_MEAN_SEMI_MAJOR_AXIS: f64 = 1.000_001_057_266_65;
/// Days in a Julian year
pub const EARTH_DAYS_IN_YEAR: f64 = 365.25;
/// Mean month length used by the Meeus calendar inversion (March-based)
pub const EARTH_MEAN_DAYS_IN_MONTH: f64 = 30.6;
/// Minutes in a civil day
pub const EARTH_MINUTES_IN_DAY: f64 = 24.0 * HOUR_MIN;

// Horizon
/// Elevation above which refraction is ignored, in degrees
pub const REFRACTION_CUTOFF_DEG: f64 = 85.0;
/// Latitude beyond which terminator points are discarded, in degrees
pub const MAX_TERMINATOR_LATITUDE: f64 = 85.0;
/// Declination beyond which one pole is in continuous night, in degrees
pub const POLAR_NIGHT_DECLINATION: f64 = 5.0;
/// Zenith angle of the Sun's centre at rise/set: 90° + 16' semi-diameter + 34' refraction
pub const SUNRISE_ZENITH_DEG: f64 = 90.0 + (16.0 + 34.0) / 60.0;
/// Clock shift applied while daylight saving time is in effect
pub const DST_SHIFT_MIN: f64 = 60.0;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: i32 = 2_299_161;
