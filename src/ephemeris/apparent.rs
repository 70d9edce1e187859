//! Earth-apparent places from barycentric states.
//!
//! Converts a pair of barycentric states (Earth, target) into the direction
//! an observer on Earth actually sees: the target is evaluated at the
//! retarded epoch found by fixed-point iteration on the one-way light time,
//! then the direction is deflected by first-order annual aberration using
//! Earth's barycentric velocity. Three iterations put planetary geometries
//! well below the 0.1 s / 0.1" display precision of this service.

use nalgebra::Vector3;

use super::{EphemerisError, PositionSource};
use crate::models::SolarBody;

/// Speed of light in AU/day.
const C_AU_PER_DAY: f64 = 173.144_632_674_240;

const LIGHT_TIME_ITERATIONS: usize = 3;

/// An apparent place as seen from Earth: RA in decimal hours [0, 24),
/// declination in degrees [-90, 90], astrometric range in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPlace {
    pub ra_hours: f64,
    pub dec_degrees: f64,
    pub distance_au: f64,
}

/// Observe `target` from Earth at `jd_tdb`, correcting for light time and
/// annual aberration.
pub fn observe(
    source: &dyn PositionSource,
    target: SolarBody,
    jd_tdb: f64,
) -> Result<ApparentPlace, EphemerisError> {
    let earth = source.barycentric(SolarBody::Earth, jd_tdb)?;

    // Retarded epoch: light left the target one light-time before jd_tdb.
    let mut retarded = source.barycentric(target, jd_tdb)?;
    for _ in 0..LIGHT_TIME_ITERATIONS {
        let light_time = (retarded.position - earth.position).norm() / C_AU_PER_DAY;
        retarded = source.barycentric(target, jd_tdb - light_time)?;
    }

    let astrometric = retarded.position - earth.position;
    let distance_au = astrometric.norm();

    // First-order annual aberration: tilt the unit direction by beta = v/c.
    let beta = earth.velocity / C_AU_PER_DAY;
    let apparent = astrometric.normalize() + beta;

    Ok(ApparentPlace {
        ra_hours: right_ascension_hours(&apparent),
        dec_degrees: declination_degrees(&apparent),
        distance_au,
    })
}

fn right_ascension_hours(direction: &Vector3<f64>) -> f64 {
    let ra_rad = direction.y.atan2(direction.x).rem_euclid(std::f64::consts::TAU);
    ra_rad * 24.0 / std::f64::consts::TAU
}

fn declination_degrees(direction: &Vector3<f64>) -> f64 {
    (direction.z / direction.norm()).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::BodyState;
    use crate::models::J2000_JD;

    /// Earth pinned to one state, target driven by a function of the epoch.
    struct TestSource {
        earth: BodyState,
        target: Box<dyn Fn(f64) -> BodyState + Send + Sync>,
    }

    impl PositionSource for TestSource {
        fn barycentric(
            &self,
            body: SolarBody,
            jd_tdb: f64,
        ) -> Result<BodyState, EphemerisError> {
            match body {
                SolarBody::Earth => Ok(self.earth),
                _ => Ok((self.target)(jd_tdb)),
            }
        }
    }

    fn still(position: Vector3<f64>) -> BodyState {
        BodyState {
            position,
            velocity: Vector3::zeros(),
        }
    }

    fn static_geometry(earth: Vector3<f64>, target: Vector3<f64>) -> TestSource {
        TestSource {
            earth: still(earth),
            target: Box::new(move |_| still(target)),
        }
    }

    #[test]
    fn test_target_due_east_is_six_hours() {
        let source =
            static_geometry(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0));
        let place = observe(&source, SolarBody::Mars, J2000_JD).unwrap();
        assert!((place.ra_hours - 6.0).abs() < 1e-9);
        assert!(place.dec_degrees.abs() < 1e-9);
        assert!((place.distance_au - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_y_direction_wraps_to_eighteen_hours() {
        let source =
            static_geometry(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, -1.0, 0.0));
        let place = observe(&source, SolarBody::Mars, J2000_JD).unwrap();
        assert!((place.ra_hours - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_inclined_target_declination() {
        // Direction (1, 0, 1): RA 0h, Dec 45 degrees, range sqrt(2).
        let source =
            static_geometry(Vector3::new(1.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 1.0));
        let place = observe(&source, SolarBody::Jupiter, J2000_JD).unwrap();
        assert!(place.ra_hours.abs() < 1e-9);
        assert!((place.dec_degrees - 45.0).abs() < 1e-9);
        assert!((place.distance_au - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_light_time_retards_a_moving_target() {
        // Target 1 AU away moving +y at 0.1 AU/day: the retarded position
        // sits at negative y, so RA wraps just below 24h.
        let source = TestSource {
            earth: still(Vector3::new(1.0, 0.0, 0.0)),
            target: Box::new(|jd| BodyState {
                position: Vector3::new(2.0, 0.1 * (jd - J2000_JD), 0.0),
                velocity: Vector3::new(0.0, 0.1, 0.0),
            }),
        };
        let place = observe(&source, SolarBody::Mercury, J2000_JD).unwrap();
        assert!(place.ra_hours > 23.9, "ra_hours = {}", place.ra_hours);
        assert!(place.dec_degrees.abs() < 1e-9);
    }

    #[test]
    fn test_aberration_deflects_toward_earth_velocity() {
        let source = TestSource {
            earth: BodyState {
                position: Vector3::new(1.0, 0.0, 0.0),
                velocity: Vector3::new(0.0, 1.0e-2, 0.0),
            },
            target: Box::new(|_| still(Vector3::new(2.0, 0.0, 0.0))),
        };
        let place = observe(&source, SolarBody::Venus, J2000_JD).unwrap();
        assert!(place.ra_hours > 0.0);
        assert!(place.ra_hours < 0.1);
    }

    #[test]
    fn test_static_geometry_needs_no_correction() {
        // With a motionless Earth and target, apparent equals geometric.
        let target = Vector3::new(-3.0, 4.0, 0.0);
        let source = static_geometry(Vector3::zeros(), target);
        let place = observe(&source, SolarBody::Neptune, J2000_JD).unwrap();
        let expected_ra = (4.0_f64).atan2(-3.0).rem_euclid(std::f64::consts::TAU) * 24.0
            / std::f64::consts::TAU;
        assert!((place.ra_hours - expected_ra).abs() < 1e-12);
        assert!((place.distance_au - 5.0).abs() < 1e-12);
    }
}
