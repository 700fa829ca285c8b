//! Time module for anchoring solar calculations to a civil instant
//!
//! A [`TimeAnchor`] wraps a `chrono::DateTime` in any time zone and derives the
//! quantities every formula in this crate is expressed in: the Julian Day
//! Number and the Julian century since J2000.0. It also carries the physical
//! constants (the gravitational constant and the J2000 epoch) as an immutable
//! [`AnchorConfig`], together with the small Newtonian gravity helpers layered
//! on a body's mass.

use crate::constants::{DAY_S, GRAVITATIONAL_CONSTANT, HOUR_MIN, J2000, JULIAN_CENTURY_DAYS};
use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minutes in a UTC day, used to turn time of day into a day fraction
const MINUTES_PER_DAY: f64 = DAY_S / 60.0;

/// Error type for time operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimeError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Local midnight does not exist on {0} in this time zone")]
    NonexistentLocalTime(NaiveDate),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Physical constants shared by every anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorConfig {
    /// Newtonian gravitational constant in N·(m/kg)²
    pub gravitational_constant: f64,
    /// Julian date of the J2000.0 epoch
    pub j2000: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            j2000: J2000,
        }
    }
}

/// Calculate the Julian Day Number at 0h of a proleptic Gregorian date
///
/// Months are shifted so that March is month 1 and February (with its leap
/// day) falls at the end of the computational year. All divisions are integer
/// divisions truncating toward zero, which is what the algorithm requires for
/// every date after 4800 BCE.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> f64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let days = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400;
    days as f64 - 32_045.5
}

/// Time of day in minutes, including fractional seconds
fn minutes_of<T: Timelike>(t: &T) -> f64 {
    let seconds = f64::from(t.second()) + f64::from(t.nanosecond()) / 1_000_000_000.0;
    f64::from(t.hour()) * HOUR_MIN + f64::from(t.minute()) + seconds / 60.0
}

fn is_usable(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// A civil instant together with the constants needed to place it on the
/// Julian time line
#[derive(Debug, Clone)]
pub struct TimeAnchor<Tz: TimeZone = Utc> {
    date: DateTime<Tz>,
    config: AnchorConfig,
}

impl<Tz: TimeZone> TimeAnchor<Tz> {
    /// Create an anchor with the default physical constants
    pub fn new(date: DateTime<Tz>) -> Self {
        Self::with_config(date, AnchorConfig::default())
    }

    /// Create an anchor with explicit physical constants
    pub fn with_config(date: DateTime<Tz>, config: AnchorConfig) -> Self {
        Self { date, config }
    }

    /// Create an anchor at local midnight of a calendar date in `tz`
    pub fn from_ymd(tz: &Tz, year: i32, month: u32, day: u32) -> Result<Self> {
        let invalid = TimeError::InvalidDate { year, month, day };
        let naive = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid.clone())?;
        let midnight = naive.and_hms_opt(0, 0, 0).ok_or(invalid)?;

        let date = tz
            .from_local_datetime(&midnight)
            .earliest()
            .ok_or(TimeError::NonexistentLocalTime(naive))?;

        Ok(Self::new(date))
    }

    /// The wrapped civil timestamp
    pub fn date(&self) -> &DateTime<Tz> {
        &self.date
    }

    pub fn config(&self) -> &AnchorConfig {
        &self.config
    }

    /// Julian Day of the wrapped instant
    ///
    /// The fractional part encodes the UTC time of day, so
    /// 2000-01-01T12:00Z maps to exactly 2451545.0.
    pub fn julian_day(&self) -> f64 {
        self.utc_date_julian_day() + self.minute_of_day_utc() / MINUTES_PER_DAY
    }

    /// Julian Day at 0h UT of the UTC calendar date
    pub fn utc_date_julian_day(&self) -> f64 {
        let utc = self.date.naive_utc();
        julian_day_number(utc.year(), utc.month(), utc.day())
    }

    /// Julian Day at 0h of the local civil calendar date
    pub fn civil_julian_day(&self) -> f64 {
        julian_day_number(self.date.year(), self.date.month(), self.date.day())
    }

    /// Julian centuries between this instant and J2000.0
    pub fn julian_century(&self) -> f64 {
        self.julian_century_at(self.julian_day())
    }

    /// Julian centuries between an arbitrary Julian Day and J2000.0
    pub fn julian_century_at(&self, day: f64) -> f64 {
        (day - self.config.j2000) / JULIAN_CENTURY_DAYS
    }

    /// Local time of day in minutes
    pub fn minute_of_day(&self) -> f64 {
        minutes_of(&self.date)
    }

    /// UTC time of day in minutes
    pub fn minute_of_day_utc(&self) -> f64 {
        minutes_of(&self.date.naive_utc())
    }

    pub fn second_of_day(&self) -> f64 {
        self.minute_of_day() * 60.0
    }

    pub fn second_of_day_utc(&self) -> f64 {
        self.minute_of_day_utc() * 60.0
    }

    /// Current offset from UTC in minutes, positive east of Greenwich
    pub fn utc_offset_minutes(&self) -> f64 {
        f64::from(self.date.offset().fix().local_minus_utc()) / 60.0
    }

    /// The zone's UTC offset in minutes on another calendar date
    ///
    /// Returns `None` if the date does not exist.
    pub fn utc_offset_minutes_on(&self, year: i32, month: u32, day: u32) -> Option<f64> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let offset = self.date.timezone().offset_from_utc_date(&date).fix();
        Some(f64::from(offset.local_minus_utc()) / 60.0)
    }

    /// Newtonian attraction in newtons between a body of `mass` and another
    ///
    /// Missing, zero or non-finite arguments yield 0 rather than an error.
    pub fn attractive_force(&self, mass: f64, other_mass: Option<f64>, distance: Option<f64>) -> f64 {
        match (other_mass, distance) {
            (Some(m2), Some(d)) if is_usable(m2) && is_usable(d) => {
                self.config.gravitational_constant * (mass * m2) / d.powi(2)
            }
            _ => 0.0,
        }
    }

    /// Standard gravitational parameter μ = G·M
    pub fn gravitational_parameter(&self, mass: f64) -> f64 {
        self.config.gravitational_constant * mass
    }
}

impl<Tz: TimeZone> fmt::Display for TimeAnchor<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (JD {:.6})", self.date.to_rfc3339(), self.julian_day())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeAnchor<Tz> {
    fn from(date: DateTime<Tz>) -> Self {
        TimeAnchor::new(date)
    }
}
