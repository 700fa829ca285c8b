//! Celestial body definitions and solar geometry calculations
//!
//! [`CelestialBody`] is the generic geometry engine: it composes a
//! [`TimeAnchor`], an owned [`Sun`] built from the same date, and an
//! [`OrbitalProfile`] supplying the body's physical and orbital constants. A
//! body without a profile (all-zero [`OrbitalElements`]) still evaluates every
//! formula; it simply yields degenerate zero or NaN results.

pub mod sun;
pub mod terminator;

pub use sun::Sun;
pub use terminator::{Hemisphere, Terminator, TerminatorArc};

use crate::constants::{
    GREGORIAN_START, MINUTES_PER_DEGREE, REFRACTION_CUTOFF_DEG, SIDEREAL_RATE,
};
use crate::coordinates::angle::{arc_to_degrees, clamp, deg2rad, rad2deg, round_half_up};
use crate::coordinates::{HorizontalCoordinates, SolarPosition};
use crate::time::TimeAnchor;
use crate::{Result, SolariumError};
use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use sun::ascending_node;

/// Below this, the azimuth denominator is treated as zero (Sun at zenith or nadir)
const AZIMUTH_DENOMINATOR_EPSILON: f64 = 0.001;

/// Physical and orbital constants of an orbiting body
///
/// The default value is the unspecialized body: every constant is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalElements {
    /// Mass in kg
    pub mass: f64,
    /// Orbital eccentricity at J2000
    pub j2000_orbital_eccentricity: f64,
    /// Mean semi-major axis in AU
    pub mean_semi_major_axis: f64,
    /// Mean motion in radians per year
    pub mean_motion: f64,
    /// Length of the year in days
    pub days_in_year: f64,
    /// Mean month length used for calendar conversion
    pub mean_days_in_month: f64,
    /// Length of the day in minutes
    pub minutes_in_day: f64,
}

impl OrbitalElements {
    /// Parse a profile from JSON; missing fields default to zero
    pub fn from_json_str(json: &str) -> Result<Self> {
        let elements: Self = serde_json::from_str(json)?;
        elements.validate()?;
        Ok(elements)
    }

    /// Load a profile from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let elements = Self::from_json_str(&contents)?;
        debug!("Loaded orbital profile from {}", path.display());
        Ok(elements)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("mass", self.mass),
            ("j2000_orbital_eccentricity", self.j2000_orbital_eccentricity),
            ("mean_semi_major_axis", self.mean_semi_major_axis),
            ("mean_motion", self.mean_motion),
            ("days_in_year", self.days_in_year),
            ("mean_days_in_month", self.mean_days_in_month),
            ("minutes_in_day", self.minutes_in_day),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(SolariumError::Config(format!(
                    "{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.j2000_orbital_eccentricity >= 1.0 {
            return Err(SolariumError::Config(format!(
                "j2000_orbital_eccentricity must be below 1 for a bound orbit, got {}",
                self.j2000_orbital_eccentricity
            )));
        }

        Ok(())
    }
}

/// The constants the geometry engine needs from a concrete body
pub trait OrbitalProfile {
    fn elements(&self) -> &OrbitalElements;

    /// Leap-year rule of the body's calendar
    fn is_leap_year(&self, _year: i32) -> bool {
        false
    }
}

impl OrbitalProfile for OrbitalElements {
    fn elements(&self) -> &OrbitalElements {
        self
    }
}

/// Atmospheric refraction correction in degrees for an apparent elevation
///
/// Piecewise model: none above 85°, a series in cot(h) down to 5°, a quartic
/// in h down to -0.575° and a single cot(h) term below that. Comparisons are
/// strict, so a value exactly on a boundary uses the lower branch.
pub fn refraction_correction(elevation: f64) -> f64 {
    if elevation > REFRACTION_CUTOFF_DEG {
        return 0.0;
    }

    let tan_elevation = deg2rad(elevation).tan();

    // arcseconds
    let correction = if elevation > 5.0 {
        58.1 / tan_elevation - 0.07 / tan_elevation.powi(3) + 0.000086 / tan_elevation.powi(5)
    } else if elevation > -0.575 {
        1735.0 + -518.2 * elevation + 103.4 * elevation.powi(2) + -12.79 * elevation.powi(3)
            + 0.711 * elevation.powi(4)
    } else {
        -20.774 / tan_elevation
    };

    correction / 3600.0
}

/// Point diametrically opposite (latitude, longitude), longitude in (-180, 180]
pub fn antipode(latitude: f64, longitude: f64) -> (f64, f64) {
    let shifted = clamp(longitude + 180.0, 360.0);
    let longitude = if shifted > 180.0 { shifted - 360.0 } else { shifted };
    (-latitude, longitude)
}

/// A body orbiting the Sun, evaluated at one civil instant
///
/// Every method depending on time has an `*_at(t)` form taking an explicit
/// Julian century; the plain form evaluates at the body's own anchor.
#[derive(Debug, Clone)]
pub struct CelestialBody<P: OrbitalProfile = OrbitalElements, Tz: TimeZone = Utc> {
    anchor: TimeAnchor<Tz>,
    sun: Sun<Tz>,
    profile: P,
}

impl<P: OrbitalProfile, Tz: TimeZone> CelestialBody<P, Tz> {
    /// Create a new celestial body
    pub fn new(date: DateTime<Tz>, profile: P) -> Self {
        Self::from_anchor(TimeAnchor::new(date), profile)
    }

    pub fn from_anchor(anchor: TimeAnchor<Tz>, profile: P) -> Self {
        let sun = Sun::from_anchor(anchor.clone());
        Self {
            anchor,
            sun,
            profile,
        }
    }

    pub fn anchor(&self) -> &TimeAnchor<Tz> {
        &self.anchor
    }

    pub fn date(&self) -> &DateTime<Tz> {
        self.anchor.date()
    }

    pub fn sun(&self) -> &Sun<Tz> {
        &self.sun
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn elements(&self) -> &OrbitalElements {
        self.profile.elements()
    }

    pub fn julian_day(&self) -> f64 {
        self.anchor.julian_day()
    }

    pub fn julian_century(&self) -> f64 {
        self.anchor.julian_century()
    }

    pub fn minute_of_day(&self) -> f64 {
        self.anchor.minute_of_day()
    }

    pub fn minute_of_day_utc(&self) -> f64 {
        self.anchor.minute_of_day_utc()
    }

    pub fn second_of_day(&self) -> f64 {
        self.anchor.second_of_day()
    }

    pub fn second_of_day_utc(&self) -> f64 {
        self.anchor.second_of_day_utc()
    }

    /// Attraction in newtons between this body and another mass
    pub fn attractive_force(&self, other_mass: Option<f64>, distance: Option<f64>) -> f64 {
        self.anchor
            .attractive_force(self.elements().mass, other_mass, distance)
    }

    /// μ = G·M in m³s⁻²
    pub fn gravitational_parameter(&self) -> f64 {
        self.anchor.gravitational_parameter(self.elements().mass)
    }

    /// Mean obliquity of the ecliptic in degrees (Astronomical Almanac 2010)
    pub fn mean_obliquity_of_ecliptic(&self) -> f64 {
        self.mean_obliquity_of_ecliptic_at(self.julian_century())
    }

    pub fn mean_obliquity_of_ecliptic_at(&self, t: f64) -> f64 {
        arc_to_degrees(23.0, 26.0, 21.406)
            - arc_to_degrees(0.0, 0.0, 46.836769) * t
            - arc_to_degrees(0.0, 0.0, 0.0001831) * t.powi(2)
            - arc_to_degrees(0.0, 0.0, 0.00200340) * t.powi(3)
            - arc_to_degrees(0.0, 0.0, 0.576e-6) * t.powi(4)
            - arc_to_degrees(0.0, 0.0, 4.34e-8) * t.powi(5)
    }

    /// Obliquity corrected for the Moon's ascending node, in degrees
    pub fn obliquity_correction(&self) -> f64 {
        self.obliquity_correction_at(self.julian_century())
    }

    pub fn obliquity_correction_at(&self, t: f64) -> f64 {
        self.mean_obliquity_of_ecliptic_at(t) + 0.00256 * deg2rad(ascending_node(t)).cos()
    }

    /// Approximate nutation in longitude, in arcseconds
    pub fn nutation(&self) -> f64 {
        self.nutation_at(self.julian_century())
    }

    pub fn nutation_at(&self, t: f64) -> f64 {
        let epsilon = deg2rad(self.obliquity_correction_at(t));
        let sun_mean_longitude = deg2rad(self.sun.mean_longitude_at(t));
        let moon_mean_longitude = deg2rad(218.3165 + 481267.8813 * t);

        -17.20 * epsilon.sin() + 1.32 * (2.0 * sun_mean_longitude).sin()
            - 0.23 * (2.0 * moon_mean_longitude).sin()
            + 0.21 * (2.0 * epsilon).sin()
    }

    pub fn orbital_eccentricity(&self) -> f64 {
        self.orbital_eccentricity_at(self.julian_century())
    }

    pub fn orbital_eccentricity_at(&self, t: f64) -> f64 {
        self.elements().j2000_orbital_eccentricity - 0.000042037 * t + 0.0000001267 * t.powi(2)
    }

    /// Distance between the Sun's centre and the body's centre, in AU
    pub fn radius_vector(&self) -> f64 {
        self.radius_vector_at(self.julian_century())
    }

    pub fn radius_vector_at(&self, t: f64) -> f64 {
        let e = self.orbital_eccentricity_at(t);
        let anomaly = deg2rad(self.sun.true_anomaly_at(t));

        self.elements().mean_semi_major_axis * (1.0 - e.powi(2)) / (1.0 + e * anomaly.cos())
    }

    pub fn refraction_correction(&self, elevation: f64) -> f64 {
        refraction_correction(elevation)
    }

    /// Apparent right ascension of the Sun in radians, in (-π, π]
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension_at(self.julian_century())
    }

    pub fn right_ascension_at(&self, t: f64) -> f64 {
        let epsilon = deg2rad(self.obliquity_correction_at(t));
        let lambda = deg2rad(self.sun.apparent_longitude_at(t));

        (epsilon.cos() * lambda.sin()).atan2(lambda.cos())
    }

    /// Apparent declination of the Sun in degrees
    pub fn solar_declination(&self) -> f64 {
        self.solar_declination_at(self.julian_century())
    }

    pub fn solar_declination_at(&self, t: f64) -> f64 {
        let epsilon = deg2rad(self.obliquity_correction_at(t));
        let lambda = deg2rad(self.sun.apparent_longitude_at(t));

        rad2deg((epsilon.sin() * lambda.sin()).clamp(-1.0, 1.0).asin())
    }

    pub fn solar_position(&self) -> SolarPosition {
        self.solar_position_at(self.julian_century())
    }

    pub fn solar_position_at(&self, t: f64) -> SolarPosition {
        SolarPosition::new(
            clamp(rad2deg(self.right_ascension_at(t)), 360.0) / 15.0,
            self.solar_declination_at(t),
        )
    }

    /// Equation of time in minutes: apparent minus mean solar time
    pub fn equation_of_time(&self) -> f64 {
        self.equation_of_time_at(self.julian_century())
    }

    pub fn equation_of_time_at(&self, t: f64) -> f64 {
        let epsilon = self.obliquity_correction_at(t);
        let l0 = deg2rad(self.sun.mean_longitude_at(t));
        let e = self.orbital_eccentricity_at(t);
        let m = deg2rad(self.sun.mean_anomaly_at(t));

        let y = (deg2rad(epsilon) / 2.0).tan().powi(2);

        let e_time = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
            + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y.powi(2) * (4.0 * l0).sin()
            - 1.25 * e.powi(2) * (2.0 * m).sin();

        rad2deg(e_time) * MINUTES_PER_DEGREE
    }

    /// Greenwich mean sidereal time in hours, [0, 24)
    ///
    /// The rotation polynomial is evaluated at 0h UT of the anchor's UTC date,
    /// the elapsed UTC time is scaled to sidereal time and the equation of the
    /// equinoxes is added.
    pub fn greenwich_mean_sidereal_time(&self) -> f64 {
        let t0 = self
            .anchor
            .julian_century_at(self.anchor.utc_date_julian_day());
        let t = self.julian_century();

        let gmst_at_zero = clamp(
            (24110.5484 + 8640184.812866 * t0 + 0.093104 * t0.powi(2) + 0.0000062 * t0.powi(3))
                / 3600.0,
            24.0,
        );

        let epsilon = deg2rad(self.obliquity_correction_at(t));
        let psi = self.nutation_at(t);

        let gmst = gmst_at_zero + (self.second_of_day_utc() * SIDEREAL_RATE) / 3600.0;
        clamp(gmst + ((psi / 15.0) * epsilon.cos()) / 3600.0, 24.0)
    }

    /// Refraction-corrected azimuth and elevation of the Sun for an observer
    ///
    /// Both values are in degrees and rounded half-up to two decimal places.
    /// Longitude is positive east.
    pub fn azimuth_and_elevation(&self, latitude: f64, longitude: f64) -> HorizontalCoordinates {
        let t = self.julian_century();
        let minutes_in_day = self.elements().minutes_in_day;

        let lat = deg2rad(latitude);
        let dec = deg2rad(self.solar_declination_at(t));
        let eot = self.equation_of_time_at(t);
        let tz = self.anchor.utc_offset_minutes();

        let mut true_solar_time = self.minute_of_day() + eot + MINUTES_PER_DEGREE * longitude - tz;
        if minutes_in_day > 0.0 {
            true_solar_time = clamp(true_solar_time, minutes_in_day);
        }

        let mut hour_angle = true_solar_time / MINUTES_PER_DEGREE - 180.0;
        if hour_angle < -180.0 {
            hour_angle += 360.0;
        }

        let cos_zenith = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * deg2rad(hour_angle).cos())
            .clamp(-1.0, 1.0);
        let zenith_rad = cos_zenith.acos();
        let zenith = rad2deg(zenith_rad);

        let denominator = lat.cos() * zenith_rad.sin();
        let mut azimuth = if denominator.abs() > AZIMUTH_DENOMINATOR_EPSILON {
            let cos_azimuth =
                ((lat.sin() * zenith_rad.cos() - dec.sin()) / denominator).clamp(-1.0, 1.0);
            let azimuth = 180.0 - rad2deg(cos_azimuth.acos());
            if hour_angle > 0.0 {
                -azimuth
            } else {
                azimuth
            }
        } else if latitude > 0.0 {
            180.0
        } else {
            0.0
        };

        if azimuth < 0.0 {
            azimuth += 360.0;
        }

        let apparent_zenith = zenith - refraction_correction(90.0 - zenith);

        HorizontalCoordinates::new(round_half_up(azimuth), round_half_up(90.0 - apparent_zenith))
    }

    /// Ordinal day of the year (fraction = time of day) for a Julian date
    ///
    /// Meeus' inverse calendar conversion driven by the profile's year and
    /// month lengths and its leap-year rule.
    pub fn day_of_year_from_julian_date(&self, jd: f64) -> f64 {
        let elements = self.elements();

        let z = (jd + 0.5).trunc();
        let f = (jd + 0.5) - z;

        let a = if z < f64::from(GREGORIAN_START) {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
            z + 1.0 + alpha - (alpha / 4.0).trunc()
        };

        let b = a + 1524.0;
        let c = ((b - 122.1) / elements.days_in_year).trunc();
        let d = (elements.days_in_year * c).trunc();
        let e = ((b - d) / elements.mean_days_in_month).trunc();

        let day = b - d - (elements.mean_days_in_month * e).trunc() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let k = if self.profile.is_leap_year(year as i32) {
            1.0
        } else {
            2.0
        };

        (275.0 * month / 9.0).trunc() - k * ((month + 9.0) / 12.0).trunc() + day - 30.0
    }
}
