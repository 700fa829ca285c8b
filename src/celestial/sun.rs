//! Orbital elements of the Sun as seen from Earth
//!
//! Low-precision J2000 series (Meeus, *Astronomical Algorithms* ch. 25) giving
//! the Sun's longitude and anomaly as polynomials in Julian centuries. Every
//! getter is a pure function of the century; the plain forms evaluate at the
//! Sun's own anchor, the `*_at` forms at an explicit century.

use crate::coordinates::angle::{clamp, deg2rad};
use crate::time::TimeAnchor;
use chrono::{DateTime, TimeZone, Utc};

/// Longitude of the Moon's ascending node in degrees
pub(crate) fn ascending_node(t: f64) -> f64 {
    125.04452 - 1934.136261 * t
}

/// The Sun, anchored to a civil instant
#[derive(Debug, Clone)]
pub struct Sun<Tz: TimeZone = Utc> {
    anchor: TimeAnchor<Tz>,
}

impl<Tz: TimeZone> Sun<Tz> {
    pub fn new(date: DateTime<Tz>) -> Self {
        Self::from_anchor(TimeAnchor::new(date))
    }

    pub fn from_anchor(anchor: TimeAnchor<Tz>) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> &TimeAnchor<Tz> {
        &self.anchor
    }

    /// Geometric mean longitude in degrees, reduced to [0, 360)
    pub fn mean_longitude(&self) -> f64 {
        self.mean_longitude_at(self.anchor.julian_century())
    }

    pub fn mean_longitude_at(&self, t: f64) -> f64 {
        clamp(280.46645 + 36000.76983 * t + 0.0003032 * t.powi(2), 360.0)
    }

    /// Mean anomaly in degrees, unreduced
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly_at(self.anchor.julian_century())
    }

    pub fn mean_anomaly_at(&self, t: f64) -> f64 {
        357.52911 + 35999.05029 * t - 0.0001537 * t.powi(2)
    }

    /// Equation of the centre in degrees
    pub fn equation_of_center(&self) -> f64 {
        self.equation_of_center_at(self.anchor.julian_century())
    }

    pub fn equation_of_center_at(&self, t: f64) -> f64 {
        let m = deg2rad(self.mean_anomaly_at(t));

        m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
            + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
            + (3.0 * m).sin() * 0.000289
    }

    /// True anomaly in degrees
    pub fn true_anomaly(&self) -> f64 {
        self.true_anomaly_at(self.anchor.julian_century())
    }

    pub fn true_anomaly_at(&self, t: f64) -> f64 {
        self.mean_anomaly_at(t) + self.equation_of_center_at(t)
    }

    /// True geometric longitude in degrees
    pub fn true_longitude(&self) -> f64 {
        self.true_longitude_at(self.anchor.julian_century())
    }

    pub fn true_longitude_at(&self, t: f64) -> f64 {
        self.mean_longitude_at(t) + self.equation_of_center_at(t)
    }

    /// Apparent longitude in degrees, corrected for nutation and aberration
    pub fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude_at(self.anchor.julian_century())
    }

    pub fn apparent_longitude_at(&self, t: f64) -> f64 {
        let omega = ascending_node(t);
        self.true_longitude_at(t) - 0.00569 - (17.20 / 3600.0) * deg2rad(omega).sin()
    }
}
