//! Tracked solar-system bodies and the per-planet snapshot record.

use qtty::{AstronomicalUnits, Degrees};
use serde::{Deserialize, Serialize};

/// Major solar-system bodies the ephemeris layer can resolve.
///
/// `Sun` and `Earth` are needed internally (heliocentric origin and observer
/// position); the seven others are the bodies the service reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarBody {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// The seven reported planets, in output order.
///
/// This table is fixed at compile time; snapshot results preserve it.
pub const TRACKED_BODIES: [SolarBody; 7] = [
    SolarBody::Mercury,
    SolarBody::Venus,
    SolarBody::Mars,
    SolarBody::Jupiter,
    SolarBody::Saturn,
    SolarBody::Uranus,
    SolarBody::Neptune,
];

impl SolarBody {
    /// Display name of the body.
    pub fn name(&self) -> &'static str {
        match self {
            SolarBody::Sun => "Sun",
            SolarBody::Mercury => "Mercury",
            SolarBody::Venus => "Venus",
            SolarBody::Earth => "Earth",
            SolarBody::Mars => "Mars",
            SolarBody::Jupiter => "Jupiter",
            SolarBody::Saturn => "Saturn",
            SolarBody::Uranus => "Uranus",
            SolarBody::Neptune => "Neptune",
        }
    }

    /// Every body the ephemeris must be able to resolve.
    pub const ALL: [SolarBody; 9] = [
        SolarBody::Sun,
        SolarBody::Mercury,
        SolarBody::Venus,
        SolarBody::Earth,
        SolarBody::Mars,
        SolarBody::Jupiter,
        SolarBody::Saturn,
        SolarBody::Uranus,
        SolarBody::Neptune,
    ];
}

/// One planet's computed snapshot at a single instant.
///
/// `ra_hours`/`dec_degrees`/`distance_au` are the numeric values; the
/// `*_formatted` fields carry the human-readable sexagesimal and AU strings.
/// `x`/`y`/`z` are heliocentric Cartesian coordinates, a Sun-centered
/// frame distinct from the Earth-apparent RA/Dec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Body name
    pub name: String,
    /// Apparent right ascension in decimal hours, [0, 24)
    pub ra_hours: f64,
    /// Right ascension as `Hh Mm S.Ss`
    pub ra_formatted: String,
    /// Apparent declination in degrees, [-90, 90]
    pub dec_degrees: Degrees,
    /// Declination as `D° M' S.S"` with an explicit sign
    pub dec_formatted: String,
    /// Distance from Earth in astronomical units
    pub distance_au: AstronomicalUnits,
    /// Distance as a fixed 3-decimal AU string
    pub distance_formatted: String,
    /// Heliocentric x coordinate (AU)
    pub x: AstronomicalUnits,
    /// Heliocentric y coordinate (AU)
    pub y: AstronomicalUnits,
    /// Heliocentric z coordinate (AU)
    pub z: AstronomicalUnits,
}
