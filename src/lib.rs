//! Solarium: solar geometry for any orbiting body, specialized for Earth
//!
//! This crate computes the Sun's position as seen from a body at a civil
//! instant: declination, right ascension, equation of time, sidereal time,
//! refraction-corrected azimuth and elevation, the day/night terminator and,
//! for Earth, solar noon and sunrise/sunset in local clock time.
//!
//! The layering follows the physics:
//!
//! - [`TimeAnchor`] places a `chrono::DateTime` on the Julian time line
//! - [`Sun`] evaluates the Sun's orbital series at an anchor
//! - [`CelestialBody`] combines both with an [`OrbitalProfile`]
//! - [`Earth`] adds Earth's constants and civil-time corrections
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use solarium::Earth;
//!
//! let earth = Earth::new(Utc.with_ymd_and_hms(2021, 6, 21, 12, 0, 0).unwrap());
//! let sun = earth.azimuth_and_elevation(51.5, 0.0);
//! assert!(sun.is_daylight());
//! ```

use thiserror::Error;

pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod time;

// Re-export commonly used types
pub use celestial::{
    antipode, refraction_correction, CelestialBody, Hemisphere, OrbitalElements, OrbitalProfile,
    Sun, Terminator, TerminatorArc,
};
pub use coordinates::{HorizontalCoordinates, SolarPosition};
pub use earthlib::{Earth, EarthProfile, TimezoneSnapshot};
pub use time::{julian_day_number, AnchorConfig, TimeAnchor, TimeError};

/// Main error type for the solarium library
#[derive(Debug, Error)]
pub enum SolariumError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for solarium operations
pub type Result<T> = std::result::Result<T, SolariumError>;
