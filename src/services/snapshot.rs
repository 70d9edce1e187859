//! Per-request snapshot of all tracked planets.
//!
//! [`compute_snapshot`] is the single computation behind every route: it
//! walks the fixed body table, derives each body's Earth-apparent
//! coordinates and heliocentric Cartesian position at the same instant, and
//! attaches the formatted strings the views display. A failure on any body
//! fails the whole snapshot; there are no partial results.

use chrono::{DateTime, Utc};
use qtty::{AstronomicalUnits, Degrees};

use crate::ephemeris::{apparent, EphemerisError, PositionSource};
use crate::models::{ObservationInstant, PlanetRecord, SolarBody, TRACKED_BODIES};

/// A complete snapshot: one record per tracked body plus the formatted
/// observation timestamp.
#[derive(Debug, Clone)]
pub struct PlanetSnapshot {
    pub planets: Vec<PlanetRecord>,
    pub current_time: String,
}

/// Compute the snapshot for all tracked bodies at `now`.
///
/// Records come back in [`TRACKED_BODIES`] order. Fails as a unit if the
/// source cannot resolve any single body.
pub fn compute_snapshot(
    source: &dyn PositionSource,
    now: DateTime<Utc>,
) -> Result<PlanetSnapshot, EphemerisError> {
    let instant = ObservationInstant::from_utc(now);
    let jd_tdb = instant.jd_tdb();

    // Heliocentric origin for the Cartesian fields, shared by all bodies.
    let sun = source.barycentric(SolarBody::Sun, jd_tdb)?;

    let mut planets = Vec::with_capacity(TRACKED_BODIES.len());
    for body in TRACKED_BODIES {
        let place = apparent::observe(source, body, jd_tdb)?;
        let heliocentric = source.barycentric(body, jd_tdb)?.position - sun.position;

        planets.push(PlanetRecord {
            name: body.name().to_string(),
            ra_hours: place.ra_hours,
            ra_formatted: format_ra_hms(place.ra_hours),
            dec_degrees: Degrees::new(place.dec_degrees),
            dec_formatted: format_dec_dms(place.dec_degrees),
            distance_au: AstronomicalUnits::new(place.distance_au),
            distance_formatted: format_distance_au(place.distance_au),
            x: AstronomicalUnits::new(heliocentric.x),
            y: AstronomicalUnits::new(heliocentric.y),
            z: AstronomicalUnits::new(heliocentric.z),
        });
    }

    Ok(PlanetSnapshot {
        planets,
        current_time: instant.timestamp_string(),
    })
}

/// Format right ascension as sexagesimal hours/minutes/seconds, seconds to
/// one decimal place.
pub fn format_ra_hms(ra_hours: f64) -> String {
    let hours = ra_hours.floor();
    let fractional_minutes = (ra_hours - hours) * 60.0;
    let minutes = fractional_minutes.floor();
    let seconds = (fractional_minutes - minutes) * 60.0;
    format!("{}h {}m {:.1}s", hours as u32, minutes as u32, seconds)
}

/// Format declination as sexagesimal degrees/arcminutes/arcseconds.
///
/// The sign is carried as an explicit prefix on the whole value, so small
/// negative declinations like -0.5 degrees keep their sign instead of
/// collapsing into a bare `0°` field.
pub fn format_dec_dms(dec_degrees: f64) -> String {
    let sign = if dec_degrees < 0.0 { "-" } else { "" };
    let magnitude = dec_degrees.abs();
    let degrees = magnitude.floor();
    let fractional_minutes = (magnitude - degrees) * 60.0;
    let minutes = fractional_minutes.floor();
    let seconds = (fractional_minutes - minutes) * 60.0;
    format!(
        "{}{}° {}' {:.1}\"",
        sign, degrees as u32, minutes as u32, seconds
    )
}

/// Format an Earth distance as a fixed 3-decimal AU string.
pub fn format_distance_au(distance_au: f64) -> String {
    format!("{:.3} AU", distance_au)
}
