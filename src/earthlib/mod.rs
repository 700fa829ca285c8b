//! Earth-specific solar time calculations
//!
//! [`Earth`] is the geometry engine configured with Earth's orbital profile,
//! plus the civil-time corrections needed to turn solar geometry into clock
//! times: a heuristic daylight-saving detector, solar noon and sunrise/sunset.
//!
//! Daylight saving time is not looked up in a time zone database. The
//! standard offset is taken as the smaller of the zone's January-1 and July-1
//! offsets (east-positive), which matches how DST is observed in the northern
//! hemisphere.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use solarium::earthlib::Earth;
//!
//! let earth = Earth::new(Utc.with_ymd_and_hms(2020, 3, 20, 0, 0, 0).unwrap());
//! let noon = earth.solar_noon_minutes(0.0, 0.0);
//! assert!((noon - 720.0).abs() < 10.0);
//! ```

use crate::celestial::{CelestialBody, OrbitalElements, OrbitalProfile};
use crate::constants::{
    DST_SHIFT_MIN, EARTH_DAYS_IN_YEAR, EARTH_J2000_ECCENTRICITY, EARTH_MASS,
    EARTH_MEAN_DAYS_IN_MONTH, EARTH_MEAN_MOTION, EARTH_MEAN_SEMI_MAJOR_AXIS,
    EARTH_MINUTES_IN_DAY, MINUTES_PER_DEGREE, SUNRISE_ZENITH_DEG,
};
use crate::coordinates::angle::{clamp, deg2rad, rad2deg};
use crate::time::TimeAnchor;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Upper bound on the day-by-day search for a sunrise or sunset
///
/// Near the poles a transit can be absent for most of a year, and exactly at
/// a pole it never occurs at whole-day sampling, so the search gives up after
/// a little more than a year.
pub const MAX_TRANSIT_SEARCH_DAYS: u32 = 400;

/// Earth's physical and orbital constants
pub const EARTH_ELEMENTS: OrbitalElements = OrbitalElements {
    mass: EARTH_MASS,
    j2000_orbital_eccentricity: EARTH_J2000_ECCENTRICITY,
    mean_semi_major_axis: EARTH_MEAN_SEMI_MAJOR_AXIS,
    mean_motion: EARTH_MEAN_MOTION,
    days_in_year: EARTH_DAYS_IN_YEAR,
    mean_days_in_month: EARTH_MEAN_DAYS_IN_MONTH,
    minutes_in_day: EARTH_MINUTES_IN_DAY,
};

/// Orbital profile of the Earth, with Gregorian leap years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EarthProfile;

impl OrbitalProfile for EarthProfile {
    fn elements(&self) -> &OrbitalElements {
        &EARTH_ELEMENTS
    }

    fn is_leap_year(&self, year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// UTC offsets captured when an [`Earth`] is constructed, in minutes east
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimezoneSnapshot {
    /// Offset in effect at the anchor instant
    pub current: f64,
    /// Standard (non-DST) offset for the anchor's year
    pub standard: f64,
}

impl TimezoneSnapshot {
    fn capture<Tz: TimeZone>(anchor: &TimeAnchor<Tz>) -> Self {
        let current = anchor.utc_offset_minutes();
        let year = anchor.date().year();

        let january = anchor.utc_offset_minutes_on(year, 1, 1).unwrap_or(current);
        let july = anchor.utc_offset_minutes_on(year, 7, 1).unwrap_or(current);

        Self {
            current,
            standard: january.min(july),
        }
    }

    /// Clocks sprung forward: the current offset lies east of standard time
    pub fn is_dst(&self) -> bool {
        self.current > self.standard
    }

    /// Offset used to turn UTC solar times into civil clock times
    pub fn civil_offset(&self) -> f64 {
        if self.is_dst() {
            self.standard + DST_SHIFT_MIN
        } else {
            self.standard
        }
    }
}

/// The Earth at one civil instant
///
/// Dereferences to the underlying [`CelestialBody`], so every geometry method
/// (declination, equation of time, terminator, ...) is available directly.
#[derive(Debug, Clone)]
pub struct Earth<Tz: TimeZone = Utc> {
    body: CelestialBody<EarthProfile, Tz>,
    timezone: TimezoneSnapshot,
}

impl<Tz: TimeZone> Deref for Earth<Tz> {
    type Target = CelestialBody<EarthProfile, Tz>;

    fn deref(&self) -> &Self::Target {
        &self.body
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Earth<Tz> {
    fn from(date: DateTime<Tz>) -> Self {
        Earth::new(date)
    }
}

impl<Tz: TimeZone> Earth<Tz> {
    pub fn new(date: DateTime<Tz>) -> Self {
        Self::from_anchor(TimeAnchor::new(date))
    }

    pub fn from_anchor(anchor: TimeAnchor<Tz>) -> Self {
        let timezone = TimezoneSnapshot::capture(&anchor);
        Self {
            body: CelestialBody::from_anchor(anchor, EarthProfile),
            timezone,
        }
    }

    pub fn body(&self) -> &CelestialBody<EarthProfile, Tz> {
        &self.body
    }

    pub fn timezone(&self) -> &TimezoneSnapshot {
        &self.timezone
    }

    fn minutes_in_day(&self) -> f64 {
        self.elements().minutes_in_day
    }

    pub fn half_day(&self) -> f64 {
        self.minutes_in_day() / 2.0
    }

    /// Whether the anchor's calendar year is a Gregorian leap year
    pub fn is_leap_year(&self) -> bool {
        self.profile().is_leap_year(self.date().year())
    }

    /// Standard-time UTC offset for the anchor's year, minutes east
    pub fn non_dst_timezone_offset(&self) -> f64 {
        self.timezone.standard
    }

    pub fn is_dst(&self) -> bool {
        self.timezone.is_dst()
    }

    /// Hour angle of sunrise in radians for a latitude and declination
    ///
    /// The Sun's centre is taken to be 50' below the geometric horizon at the
    /// moment of rising. NaN when the Sun never crosses that altitude (polar
    /// day or polar night).
    pub fn solar_transit_hour_angle(&self, latitude: f64, declination: f64) -> f64 {
        let lat = deg2rad(latitude);
        let dec = deg2rad(declination);

        let h_arg = deg2rad(SUNRISE_ZENITH_DEG).cos() / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();
        h_arg.acos()
    }

    /// Sunrise (`rising`) or sunset in minutes after 0h UTC of the day at `jd`
    pub fn solar_transit_utc(&self, rising: bool, jd: f64, latitude: f64, longitude: f64) -> f64 {
        let t = self.anchor().julian_century_at(jd);
        let eot = self.equation_of_time_at(t);
        let declination = self.solar_declination_at(t);

        let mut hour_angle = self.solar_transit_hour_angle(latitude, declination);
        if !rising {
            hour_angle = -hour_angle;
        }

        let delta = longitude + rad2deg(hour_angle);
        self.half_day() - MINUTES_PER_DEGREE * delta - eot
    }

    /// Julian day of the nearest day, searching forward (`next`) or backward
    /// from `jd`, on which the requested transit occurs
    ///
    /// Returns `None` when no transit is found within
    /// [`MAX_TRANSIT_SEARCH_DAYS`].
    pub fn next_solar_transit(
        &self,
        next: bool,
        rising: bool,
        jd: f64,
        latitude: f64,
        longitude: f64,
    ) -> Option<f64> {
        let event = if rising { "sunrise" } else { "sunset" };
        let step = if next { 1.0 } else { -1.0 };

        let mut day = jd;
        let mut transit = self.solar_transit_utc(rising, day, latitude, longitude);
        let mut shifted = 0;

        while transit.is_nan() {
            if shifted == MAX_TRANSIT_SEARCH_DAYS {
                warn!(
                    "No {} within {} days of JD {} at latitude {}",
                    event, MAX_TRANSIT_SEARCH_DAYS, jd, latitude
                );
                return None;
            }
            day += step;
            shifted += 1;
            transit = self.solar_transit_utc(rising, day, latitude, longitude);
        }

        if shifted > 0 {
            debug!("Found {} {} days from JD {}", event, shifted, jd);
        }

        // Move to the day on which the event falls in local time
        let local = transit + self.timezone.civil_offset();
        Some(day + (local / self.minutes_in_day()).floor())
    }

    /// Local solar noon in minutes after local midnight, [0, minutes_in_day)
    pub fn solar_noon_minutes(&self, _latitude: f64, longitude: f64) -> f64 {
        let jd = self.anchor().civil_julian_day();
        let minutes_in_day = self.minutes_in_day();

        let t_noon = self.anchor().julian_century_at(jd - longitude / 360.0);
        let eot_noon = self.equation_of_time_at(t_noon);
        let noon_offset = self.half_day() - MINUTES_PER_DEGREE * longitude - eot_noon;

        let t_next = self
            .anchor()
            .julian_century_at(jd + noon_offset / minutes_in_day);
        let eot_next = self.equation_of_time_at(t_next);
        trace!("Solar noon equation of time refined from {} to {}", eot_noon, eot_next);

        let noon = self.half_day() - MINUTES_PER_DEGREE * longitude - eot_next
            + self.timezone.civil_offset();
        clamp(noon, minutes_in_day)
    }

    /// Local solar noon on the anchor's calendar day
    pub fn solar_noon(&self, latitude: f64, longitude: f64) -> Option<DateTime<Tz>> {
        self.at_civil_minute(self.solar_noon_minutes(latitude, longitude))
    }

    /// Local sunrise (`rising`) or sunset in minutes after local midnight
    ///
    /// NaN when the Sun does not rise or set on this day.
    pub fn solar_transit_minutes(&self, rising: bool, latitude: f64, longitude: f64) -> f64 {
        let jd = self.anchor().civil_julian_day();
        let minutes_in_day = self.minutes_in_day();

        let utc = self.solar_transit_utc(rising, jd, latitude, longitude);
        let utc_next = self.solar_transit_utc(rising, jd + utc / minutes_in_day, latitude, longitude);
        trace!("Transit refined from {} to {} minutes UTC", utc, utc_next);

        clamp(utc_next + self.timezone.civil_offset(), minutes_in_day)
    }

    /// Local sunrise (`rising`) or sunset on the anchor's calendar day
    pub fn solar_transit(&self, rising: bool, latitude: f64, longitude: f64) -> Option<DateTime<Tz>> {
        self.at_civil_minute(self.solar_transit_minutes(rising, latitude, longitude))
    }

    pub fn sunrise(&self, latitude: f64, longitude: f64) -> Option<DateTime<Tz>> {
        self.solar_transit(true, latitude, longitude)
    }

    pub fn sunset(&self, latitude: f64, longitude: f64) -> Option<DateTime<Tz>> {
        self.solar_transit(false, latitude, longitude)
    }

    /// The instant whose local clock reads `minutes` after midnight on the
    /// anchor's calendar day
    ///
    /// A clock reading skipped by a forward offset change is placed that many
    /// elapsed minutes after local midnight instead.
    fn at_civil_minute(&self, minutes: f64) -> Option<DateTime<Tz>> {
        if !minutes.is_finite() {
            return None;
        }

        let date = self.date();
        let tz = date.timezone();
        let midnight = date.date_naive().and_hms_opt(0, 0, 0)?;
        let offset = Duration::milliseconds((minutes * 60_000.0).round() as i64);

        let wall_clock = midnight.checked_add_signed(offset)?;
        tz.from_local_datetime(&wall_clock).earliest().or_else(|| {
            tz.from_local_datetime(&midnight)
                .earliest()?
                .checked_add_signed(offset)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian_day_number;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Timelike};
    use rstest::rstest;

    /// A zone five hours west of UTC that observes a one-hour DST from April
    /// through October
    #[derive(Debug, Clone, Copy)]
    struct EasternLike;

    impl EasternLike {
        fn offset_for(month: u32) -> FixedOffset {
            if (4..=10).contains(&month) {
                FixedOffset::west_opt(4 * 3600).unwrap()
            } else {
                FixedOffset::west_opt(5 * 3600).unwrap()
            }
        }
    }

    impl TimeZone for EasternLike {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            EasternLike
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::offset_for(local.month()))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_for(utc.month())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_for(utc.month())
        }
    }

    /// A zone five hours west of UTC whose clocks spring forward to four hours
    /// west at 02:00 local time on 14 March 2021
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn change_day() -> NaiveDate {
            NaiveDate::from_ymd_opt(2021, 3, 14).unwrap()
        }

        fn standard() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn daylight() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            if *local < Self::change_day() {
                LocalResult::Single(Self::standard())
            } else {
                LocalResult::Single(Self::daylight())
            }
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let change = Self::change_day();
            if *local < change.and_hms_opt(2, 0, 0).unwrap() {
                LocalResult::Single(Self::standard())
            } else if *local < change.and_hms_opt(3, 0, 0).unwrap() {
                LocalResult::None
            } else {
                LocalResult::Single(Self::daylight())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            if *utc < Self::change_day() {
                Self::standard()
            } else {
                Self::daylight()
            }
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::change_day().and_hms_opt(7, 0, 0).unwrap() {
                Self::standard()
            } else {
                Self::daylight()
            }
        }
    }

    fn earth_utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Earth {
        Earth::new(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    #[test]
    fn test_earth_profile() {
        let earth = earth_utc(2021, 1, 1, 0, 0);

        assert_eq!(earth.elements().mass, 5.972_19e24);
        assert_eq!(earth.elements().minutes_in_day, 1440.0);
        assert_eq!(earth.half_day(), 720.0);
        assert_relative_eq!(earth.gravitational_parameter(), 3.985_242_387e14, max_relative = 1e-9);
        assert!(!earth.is_leap_year());
    }

    #[rstest]
    #[case(2000, true)]
    #[case(1900, false)]
    #[case(2024, true)]
    #[case(2023, false)]
    fn test_gregorian_leap_years(#[case] year: i32, #[case] expected: bool) {
        assert_eq!(EarthProfile.is_leap_year(year), expected);
    }

    #[rstest]
    #[case(2021, 3, 20, -7.37)]
    #[case(2021, 4, 15, 0.03)]
    #[case(2021, 6, 13, -0.13)]
    #[case(2021, 9, 1, 0.05)]
    #[case(2021, 9, 22, 7.34)]
    #[case(2021, 11, 3, 16.49)]
    #[case(2021, 2, 11, -14.23)]
    #[case(2021, 12, 25, -0.18)]
    fn test_equation_of_time(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: f64,
    ) {
        let eot = earth_utc(year, month, day, 12, 0).equation_of_time();
        assert_abs_diff_eq!(eot, expected, epsilon = 0.02);
    }

    #[test]
    fn test_equation_of_time_extremes() {
        assert!(earth_utc(2021, 11, 3, 12, 0).equation_of_time() > 16.0);
        assert!(earth_utc(2021, 2, 11, 12, 0).equation_of_time() < -14.0);
    }

    #[test]
    fn test_radius_vector_perihelion_aphelion() {
        assert_abs_diff_eq!(earth_utc(2021, 1, 3, 12, 0).radius_vector(), 0.9833, epsilon = 1e-4);
        assert_abs_diff_eq!(earth_utc(2021, 7, 4, 12, 0).radius_vector(), 1.0167, epsilon = 1e-4);
    }

    #[rstest]
    #[case(2_459_580.5, 1.0)]
    #[case(2_459_215.25, 366.75)]
    #[case(2_459_274.5, 60.0)]
    #[case(2_458_909.5, 61.0)]
    #[case(2_460_675.5, 366.0)]
    fn test_day_of_year(#[case] jd: f64, #[case] expected: f64) {
        let earth = earth_utc(2021, 1, 1, 0, 0);
        assert_relative_eq!(earth.day_of_year_from_julian_date(jd), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_range() {
        for hour in 0..24 {
            let gmst = earth_utc(2019, 10, 27, hour, 30).greenwich_mean_sidereal_time();
            assert!((0.0..24.0).contains(&gmst));
        }
    }

    #[test]
    fn test_utc_zone_has_no_dst() {
        let earth = earth_utc(2021, 7, 1, 12, 0);
        assert!(!earth.is_dst());
        assert_eq!(earth.non_dst_timezone_offset(), 0.0);

        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let tokyo = Earth::new(tz.with_ymd_and_hms(2021, 7, 1, 12, 0, 0).unwrap());
        assert!(!tokyo.is_dst());
        assert_eq!(tokyo.non_dst_timezone_offset(), 540.0);
    }

    #[test]
    fn test_dst_detection() {
        let summer = Earth::new(EasternLike.with_ymd_and_hms(2021, 6, 21, 9, 0, 0).unwrap());
        assert!(summer.is_dst());
        assert_eq!(summer.non_dst_timezone_offset(), -300.0);
        assert_eq!(summer.timezone().current, -240.0);
        assert_eq!(summer.timezone().civil_offset(), -240.0);

        let winter = Earth::new(EasternLike.with_ymd_and_hms(2021, 12, 21, 9, 0, 0).unwrap());
        assert!(!winter.is_dst());
        assert_eq!(winter.timezone().civil_offset(), -300.0);
    }

    #[test]
    fn test_solar_noon_in_daylight_saving_zone() {
        // New York sees solar noon just before 13:00 EDT at the June solstice
        let earth = Earth::new(EasternLike.with_ymd_and_hms(2021, 6, 21, 9, 0, 0).unwrap());
        assert_abs_diff_eq!(earth.solar_noon_minutes(40.7, -74.0), 777.9, epsilon = 0.1);

        let noon = earth.solar_noon(40.7, -74.0).unwrap();
        assert_eq!((noon.hour(), noon.minute()), (12, 57));
        assert_eq!(noon.date_naive(), NaiveDate::from_ymd_opt(2021, 6, 21).unwrap());
    }

    #[test]
    fn test_solar_noon_on_clock_change_day() {
        let earth = Earth::new(SpringForward.with_ymd_and_hms(2021, 3, 14, 12, 0, 0).unwrap());
        assert!(earth.is_dst());

        let minutes = earth.solar_noon_minutes(40.7, -74.0);
        let noon = earth.solar_noon(40.7, -74.0).unwrap();

        assert_eq!(noon.date_naive(), SpringForward::change_day());
        assert_eq!(noon.offset().local_minus_utc(), -4 * 3600);
        let wall_clock = (f64::from(noon.num_seconds_from_midnight())
            + f64::from(noon.nanosecond()) / 1e9)
            / 60.0;
        assert_abs_diff_eq!(wall_clock, minutes, epsilon = 1e-3);
        assert_eq!(noon.hour(), 13);
    }

    #[test]
    fn test_civil_minutes_across_clock_change() {
        let earth = Earth::new(SpringForward.with_ymd_and_hms(2021, 3, 14, 12, 0, 0).unwrap());
        let change = SpringForward::change_day();

        // 01:00 is still standard time
        let early = earth.at_civil_minute(60.0).unwrap();
        assert_eq!(early.naive_utc(), change.and_hms_opt(6, 0, 0).unwrap());

        // 02:30 never appears on the clock; it lands 150 minutes after midnight
        let skipped = earth.at_civil_minute(150.0).unwrap();
        assert_eq!(skipped.naive_utc(), change.and_hms_opt(7, 30, 0).unwrap());
        assert_eq!(skipped.hour(), 3);

        let afternoon = earth.at_civil_minute(15.0 * 60.0).unwrap();
        assert_eq!(afternoon.naive_utc(), change.and_hms_opt(19, 0, 0).unwrap());

        assert_eq!(earth.at_civil_minute(f64::NAN), None);
    }

    #[test]
    fn test_solar_noon_at_equinox() {
        let earth = earth_utc(2020, 3, 20, 0, 0);
        let minutes = earth.solar_noon_minutes(0.0, 0.0);

        // Equation of time is about -7.4 minutes, so noon comes late
        assert!((minutes - 720.0).abs() < 10.0);
        assert_abs_diff_eq!(minutes, 727.3, epsilon = 0.1);

        let noon = earth.solar_noon(0.0, 0.0).unwrap();
        assert_eq!((noon.hour(), noon.minute()), (12, 7));
    }

    #[test]
    fn test_solar_noon_ignores_time_of_day() {
        let morning = earth_utc(2021, 8, 8, 1, 0).solar_noon(48.0, 11.0);
        let evening = earth_utc(2021, 8, 8, 22, 45).solar_noon(48.0, 11.0);
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_transit_hour_angle() {
        let earth = earth_utc(2021, 3, 20, 12, 0);

        // At the equator the Sun rises 90°50' from the meridian
        assert_abs_diff_eq!(
            rad2deg(earth.solar_transit_hour_angle(0.0, 0.0)),
            90.0 + 50.0 / 60.0,
            epsilon = 1e-9
        );
        assert!(earth.solar_transit_hour_angle(80.0, -23.0).is_nan());
        assert!(earth.solar_transit_hour_angle(-80.0, 23.0).is_nan());
    }

    #[rstest]
    #[case(2021, 3, 20)]
    #[case(2021, 6, 21)]
    #[case(2021, 12, 21)]
    fn test_sunrise_precedes_sunset_at_equator(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let earth = earth_utc(year, month, day, 0, 0);
        let sunrise = earth.sunrise(0.0, 0.0).unwrap();
        let sunset = earth.sunset(0.0, 0.0).unwrap();

        assert!(sunrise < sunset);
        assert_eq!(sunrise.date_naive(), sunset.date_naive());
        // Equatorial day length stays within a few minutes of twelve hours
        let day_length = (sunset - sunrise).num_minutes();
        assert!((715..=735).contains(&day_length), "{} minutes", day_length);
    }

    #[test]
    fn test_sunrise_and_sunset_in_london() {
        let earth = earth_utc(2021, 6, 21, 0, 0);

        assert_abs_diff_eq!(earth.solar_transit_minutes(true, 51.5, 0.0), 222.65, epsilon = 0.1);
        assert_abs_diff_eq!(earth.solar_transit_minutes(false, 51.5, 0.0), 1221.05, epsilon = 0.1);
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        let earth = earth_utc(2021, 12, 21, 0, 0);

        assert!(earth.solar_transit_minutes(true, 78.2, 15.6).is_nan());
        assert_eq!(earth.sunrise(78.2, 15.6), None);
    }

    #[test]
    fn test_next_solar_transit() {
        let earth = earth_utc(2021, 12, 21, 0, 0);
        let jd = julian_day_number(2021, 12, 21);

        // Always found on the same day at the equator
        assert_eq!(earth.next_solar_transit(true, true, jd, 0.0, 0.0), Some(jd));

        // Svalbard: polar night lasts until mid February
        let next = earth.next_solar_transit(true, true, jd, 78.2, 15.6).unwrap();
        assert_eq!(next, julian_day_number(2022, 2, 16));

        // Searching backward finds the last sunset before the polar night
        let previous = earth.next_solar_transit(false, false, jd, 78.2, 15.6).unwrap();
        assert!(previous < jd - 30.0);
    }

    #[test]
    fn test_next_solar_transit_gives_up_at_the_pole() {
        let earth = earth_utc(2021, 12, 21, 0, 0);
        let jd = julian_day_number(2021, 12, 21);

        assert_eq!(earth.next_solar_transit(true, true, jd, 90.0, 0.0), None);
    }

    #[test]
    fn test_azimuth_and_elevation() {
        // London at noon on the June solstice: Sun due south, about 62° up
        let noon = earth_utc(2021, 6, 21, 12, 0).azimuth_and_elevation(51.5, 0.0);
        assert_abs_diff_eq!(noon.azimuth, 179.09, epsilon = 0.011);
        assert_abs_diff_eq!(noon.elevation, 61.94, epsilon = 0.011);

        let morning = earth_utc(2021, 6, 21, 8, 0).azimuth_and_elevation(51.5, 0.0);
        assert!(morning.azimuth > 90.0 && morning.azimuth < 110.0);

        let midnight = earth_utc(2021, 6, 21, 0, 0).azimuth_and_elevation(51.5, 0.0);
        assert!(!midnight.is_daylight());
        assert_abs_diff_eq!(midnight.elevation, -15.04, epsilon = 0.011);
    }

    #[test]
    fn test_azimuth_and_elevation_in_local_time() {
        // 13:00 EDT in New York is 17:00 UTC, just after solar noon
        let earth = Earth::new(EasternLike.with_ymd_and_hms(2021, 6, 21, 13, 0, 0).unwrap());
        let coords = earth.azimuth_and_elevation(40.7, -74.0);

        assert_abs_diff_eq!(coords.azimuth, 181.62, epsilon = 0.011);
        assert_abs_diff_eq!(coords.elevation, 72.74, epsilon = 0.011);
    }

    #[test]
    fn test_outputs_are_rounded() {
        let coords = earth_utc(2022, 10, 1, 15, 17).azimuth_and_elevation(-33.9, 151.2);
        for value in [coords.azimuth, coords.elevation] {
            assert_abs_diff_eq!(value * 100.0, (value * 100.0).round(), epsilon = 1e-6);
        }
    }
}
