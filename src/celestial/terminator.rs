//! Day/night terminator
//!
//! The terminator is the great circle 90° from the subsolar point. It is
//! traced one whole degree at a time around that circle using the Sun's
//! declination and the Greenwich hour angle of the Sun. Points steeper than
//! 85° of latitude are discarded because the longitude there is numerically
//! indeterminate.

use super::{CelestialBody, OrbitalProfile};
use crate::constants::{MAX_TERMINATOR_LATITUDE, POLAR_NIGHT_DECLINATION};
use crate::coordinates::angle::{clamp, deg2rad, rad2deg};
use crate::coordinates::SolarPosition;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};

/// The hemisphere whose pole is in continuous night
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    North,
    South,
}

/// A run of terminator points as parallel latitude/longitude lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerminatorArc {
    pub lats: Vec<f64>,
    pub lngs: Vec<f64>, // [0, 360)
}

impl TerminatorArc {
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    pub fn reverse(&mut self) {
        self.lats.reverse();
        self.lngs.reverse();
    }

    pub fn append(&mut self, other: &mut TerminatorArc) {
        self.lats.append(&mut other.lats);
        self.lngs.append(&mut other.lngs);
    }

    /// Iterate over (latitude, longitude) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lats.iter().copied().zip(self.lngs.iter().copied())
    }
}

/// The full terminator curve, consistently wound, plus the polar-night flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terminator {
    pub lats: Vec<f64>,
    pub lngs: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polar_night: Option<Hemisphere>,
}

impl Terminator {
    pub fn len(&self) -> usize {
        self.lats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lats.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.lats.iter().copied().zip(self.lngs.iter().copied())
    }
}

/// Hemisphere in polar night for a given solar declination
pub fn polar_night_for(declination: f64) -> Option<Hemisphere> {
    if declination > POLAR_NIGHT_DECLINATION {
        Some(Hemisphere::South)
    } else if declination < -POLAR_NIGHT_DECLINATION {
        Some(Hemisphere::North)
    } else {
        None
    }
}

fn trace_arc(
    gmst: f64,
    position: &SolarPosition,
    start_lng: i32,
    end_lng: i32,
    reverse: bool,
) -> TerminatorArc {
    // Longitude of the subsolar point, measured westward
    let sun_long = deg2rad(clamp(-(gmst * 15.0 - position.right_ascension * 15.0), 360.0));
    let dec = deg2rad(position.declination);

    let mut arc = TerminatorArc::default();

    for lng in start_lng..=end_lng {
        let i = deg2rad(f64::from(lng));
        let lat = rad2deg((dec.cos() * i.sin()).asin());

        if lat.abs() < MAX_TERMINATOR_LATITUDE {
            let x = -sun_long.cos() * dec.sin() * i.sin() - sun_long.sin() * i.cos();
            let y = -sun_long.sin() * dec.sin() * i.sin() + sun_long.cos() * i.cos();

            arc.lats.push(lat);
            arc.lngs.push(clamp(rad2deg(y.atan2(x)), 360.0));
        }
    }

    if reverse {
        arc.reverse();
    }
    arc
}

impl<P: OrbitalProfile, Tz: TimeZone> CelestialBody<P, Tz> {
    /// Terminator points for each whole degree in `[start_lng, end_lng]` of
    /// the terminator circle
    pub fn terminator_arc(&self, start_lng: i32, end_lng: i32, reverse: bool) -> TerminatorArc {
        trace_arc(
            self.greenwich_mean_sidereal_time(),
            &self.solar_position(),
            start_lng,
            end_lng,
            reverse,
        )
    }

    /// The complete terminator as one continuous curve
    ///
    /// The 0–90° and 270–360° arcs form the eastern half and the 90–270° arc
    /// the western half. One half is reversed depending on the sign of the
    /// declination so the curve is wound the same way in every season.
    pub fn terminator_coordinates(&self) -> Terminator {
        let gmst = self.greenwich_mean_sidereal_time();
        let position = self.solar_position();

        let mut east = trace_arc(gmst, &position, 0, 90, true);
        let mut west = trace_arc(gmst, &position, 90, 270, false);
        east.append(&mut trace_arc(gmst, &position, 270, 360, true));

        if position.declination < 0.0 {
            west.reverse();
        } else if position.declination > 0.0 {
            east.reverse();
        }

        east.append(&mut west);

        Terminator {
            lats: east.lats,
            lngs: east.lngs,
            polar_night: polar_night_for(position.declination),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::OrbitalElements;
    use approx::assert_abs_diff_eq;
    use chrono::Utc;

    fn body_at(y: i32, m: u32, d: u32, h: u32) -> CelestialBody {
        CelestialBody::new(
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap(),
            OrbitalElements::default(),
        )
    }

    #[test]
    fn test_polar_night_thresholds() {
        assert_eq!(polar_night_for(23.4), Some(Hemisphere::South));
        assert_eq!(polar_night_for(-23.4), Some(Hemisphere::North));
        assert_eq!(polar_night_for(5.0), None);
        assert_eq!(polar_night_for(-5.0), None);
        assert_eq!(polar_night_for(0.0), None);
    }

    #[test]
    fn test_terminator_at_june_solstice() {
        let body = body_at(2021, 6, 21, 12);
        let terminator = body.terminator_coordinates();

        assert_eq!(terminator.lats.len(), terminator.lngs.len());
        assert_eq!(terminator.polar_night, Some(Hemisphere::South));
        // With the Sun 23° north no point comes near the 85° cutoff
        assert_eq!(terminator.len(), 91 + 181 + 91);

        for (lat, lng) in terminator.points() {
            assert!(lat.abs() <= 90.0 - 23.4 + 0.1, "lat {}", lat);
            assert!((0.0..360.0).contains(&lng), "lng {}", lng);
        }
    }

    #[test]
    fn test_terminator_at_equinox() {
        let body = body_at(2021, 3, 20, 12);
        let terminator = body.terminator_coordinates();

        assert_eq!(terminator.lats.len(), terminator.lngs.len());
        assert_eq!(terminator.polar_night, None);
        // Near-polar points are dropped when the terminator runs through the poles
        assert!(terminator.len() < 363);
        assert!(terminator.lats.iter().all(|lat| lat.abs() < 85.0));
    }

    #[test]
    fn test_terminator_matches_declination_sign() {
        for (month, expected) in [(1, Some(Hemisphere::North)), (7, Some(Hemisphere::South))] {
            let body = body_at(2022, month, 10, 0);
            let dec = body.solar_declination();
            let terminator = body.terminator_coordinates();

            assert_eq!(terminator.polar_night, expected);
            assert_eq!(terminator.polar_night, polar_night_for(dec));
        }
    }

    #[test]
    fn test_arc_reversal() {
        let body = body_at(2020, 9, 1, 8);
        let forward = body.terminator_arc(10, 40, false);
        let mut backward = body.terminator_arc(10, 40, true);

        assert_eq!(forward.len(), 31);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_terminator_points_are_ninety_degrees_from_subsolar_point() {
        let body = body_at(2021, 6, 21, 12);
        let position = body.solar_position();
        let gmst = body.greenwich_mean_sidereal_time();

        // Subsolar longitude (east positive) from the Greenwich hour angle of the Sun
        let subsolar_lng = deg2rad(position.ra_degrees() - gmst * 15.0);
        let subsolar_lat = deg2rad(position.declination);

        for (lat, lng) in body.terminator_arc(0, 360, false).points() {
            let (lat, lng) = (deg2rad(lat), deg2rad(lng));
            let cos_distance = lat.sin() * subsolar_lat.sin()
                + lat.cos() * subsolar_lat.cos() * (lng - subsolar_lng).cos();
            assert_abs_diff_eq!(cos_distance, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_terminator_serialization_omits_missing_polar_night() {
        let terminator = Terminator {
            lats: vec![1.0],
            lngs: vec![2.0],
            polar_night: None,
        };
        assert_eq!(
            serde_json::to_string(&terminator).unwrap(),
            r#"{"lats":[1.0],"lngs":[2.0]}"#
        );

        let polar = Terminator {
            polar_night: Some(Hemisphere::North),
            ..terminator
        };
        assert!(serde_json::to_string(&polar).unwrap().ends_with(r#""polar_night":"north"}"#));
    }
}
