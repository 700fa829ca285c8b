//! Solar Geometry Information Tool
//!
//! Prints the Sun's position and the day's solar events for an observer at a
//! given place and civil time. With `--profile`, the geometry is evaluated for
//! a custom body loaded from a JSON orbital profile instead of the Earth, and
//! Earth-only civil events (noon, sunrise, sunset) are omitted.
//!
//! Usage:
//!   cargo run --bin solar_info -- --lat 51.5 --lng -0.13 --date 2021-06-21 --time 12:00 --utc-offset 1

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{ArgAction, Parser};
use serde::Serialize;
use solarium::{
    CelestialBody, Earth, Hemisphere, HorizontalCoordinates, OrbitalElements, OrbitalProfile,
    SolarPosition,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Solar Geometry Information Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes solar position, equation of time, solar noon, sunrise and sunset",
    long_about = None
)]
struct Args {
    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lng: f64,

    /// Calendar date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Local clock time (HH:MM or HH:MM:SS); defaults to 12:00
    #[arg(long, default_value = "12:00")]
    time: String,

    /// Offset of local clock time from UTC in hours, east positive
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    utc_offset: f64,

    /// Emit the report as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// JSON orbital profile of a custom body to use instead of the Earth
    #[arg(long)]
    profile: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GeometryReport {
    julian_day: f64,
    julian_century: f64,
    solar_position: SolarPosition,
    equation_of_time_min: f64,
    radius_vector_au: f64,
    gmst_hours: f64,
    horizontal: HorizontalCoordinates,
    terminator_points: usize,
    polar_night: Option<Hemisphere>,
}

#[derive(Debug, Serialize)]
struct CivilEvents {
    is_dst: bool,
    solar_noon: Option<String>,
    sunrise: Option<String>,
    sunset: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    instant: String,
    latitude: f64,
    longitude: f64,
    geometry: GeometryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<CivilEvents>,
}

fn parse_instant(args: &Args) -> Result<DateTime<FixedOffset>> {
    let offset_seconds = (args.utc_offset * 3600.0).round() as i32;
    let tz = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| format!("UTC offset out of range: {} hours", args.utc_offset))?;

    let date = match &args.date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")?,
        None => Utc::now().with_timezone(&tz).date_naive(),
    };
    let time = NaiveTime::parse_from_str(&args.time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&args.time, "%H:%M"))?;

    tz.from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| format!("Ambiguous local time {} {}", date, time).into())
}

fn geometry_report<P: OrbitalProfile>(
    body: &CelestialBody<P, FixedOffset>,
    latitude: f64,
    longitude: f64,
) -> GeometryReport {
    let terminator = body.terminator_coordinates();

    GeometryReport {
        julian_day: body.julian_day(),
        julian_century: body.julian_century(),
        solar_position: body.solar_position(),
        equation_of_time_min: body.equation_of_time(),
        radius_vector_au: body.radius_vector(),
        gmst_hours: body.greenwich_mean_sidereal_time(),
        horizontal: body.azimuth_and_elevation(latitude, longitude),
        terminator_points: terminator.len(),
        polar_night: terminator.polar_night,
    }
}

fn format_event(event: Option<DateTime<FixedOffset>>) -> Option<String> {
    event.map(|t| t.format("%H:%M:%S").to_string())
}

fn civil_events(earth: &Earth<FixedOffset>, latitude: f64, longitude: f64) -> CivilEvents {
    CivilEvents {
        is_dst: earth.is_dst(),
        solar_noon: format_event(earth.solar_noon(latitude, longitude)),
        sunrise: format_event(earth.sunrise(latitude, longitude)),
        sunset: format_event(earth.sunset(latitude, longitude)),
    }
}

/// Prints a section header with a title and separator line
fn print_section_header(title: &str) {
    println!("\n{}:", title);
    println!("-------------------------------------------------------");
}

/// Helper to print named values in a formatted way
fn print_named_value(name: &str, value: impl std::fmt::Display) {
    println!("{}: {}", name, value);
}

fn print_report(report: &Report) {
    let geometry = &report.geometry;

    print_section_header("Observer");
    print_named_value("Instant", &report.instant);
    print_named_value("Latitude", format!("{:.4}°", report.latitude));
    print_named_value("Longitude", format!("{:.4}°", report.longitude));

    print_section_header("Time");
    print_named_value("Julian day", format!("{:.6}", geometry.julian_day));
    print_named_value("Julian century", format!("{:.10}", geometry.julian_century));
    print_named_value("GMST", format!("{:.6} h", geometry.gmst_hours));

    print_section_header("Sun");
    print_named_value(
        "Right ascension",
        format!("{:.6} h", geometry.solar_position.right_ascension),
    );
    print_named_value(
        "Declination",
        format!("{:.6}°", geometry.solar_position.declination),
    );
    print_named_value(
        "Equation of time",
        format!("{:.2} min", geometry.equation_of_time_min),
    );
    print_named_value("Radius vector", format!("{:.6} AU", geometry.radius_vector_au));
    print_named_value("Azimuth", format!("{:.2}°", geometry.horizontal.azimuth));
    print_named_value("Elevation", format!("{:.2}°", geometry.horizontal.elevation));

    print_section_header("Terminator");
    print_named_value("Points", geometry.terminator_points);
    match geometry.polar_night {
        Some(Hemisphere::North) => print_named_value("Polar night", "north"),
        Some(Hemisphere::South) => print_named_value("Polar night", "south"),
        None => print_named_value("Polar night", "none"),
    }

    if let Some(events) = &report.events {
        let show = |event: &Option<String>| event.clone().unwrap_or_else(|| "none".to_string());

        print_section_header("Events (local time)");
        print_named_value("Daylight saving", events.is_dst);
        print_named_value("Solar noon", show(&events.solar_noon));
        print_named_value("Sunrise", show(&events.sunrise));
        print_named_value("Sunset", show(&events.sunset));
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let instant = parse_instant(&args)?;

    let (geometry, events) = match &args.profile {
        Some(path) => {
            let elements = OrbitalElements::from_json_file(path)?;
            let body = CelestialBody::new(instant, elements);
            (geometry_report(&body, args.lat, args.lng), None)
        }
        None => {
            let earth = Earth::new(instant);
            (
                geometry_report(earth.body(), args.lat, args.lng),
                Some(civil_events(&earth, args.lat, args.lng)),
            )
        }
    };

    let report = Report {
        instant: instant.to_rfc3339(),
        latitude: args.lat,
        longitude: args.lng,
        geometry,
        events,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
