//! Synthetic circular-orbit backend for tests and offline development.
//!
//! Every planet moves on a circular orbit in the ecliptic-aligned xy plane
//! at its mean distance and sidereal period, with a per-body phase offset so
//! geometries stay distinct. The Sun sits at the barycenter, so the
//! heliocentric and barycentric frames coincide and snapshot output can be
//! asserted in closed form.

use nalgebra::Vector3;
use std::f64::consts::TAU;

use super::{BodyState, EphemerisError, PositionSource};
use crate::models::{SolarBody, J2000_JD};

/// Mean orbital radius (AU), sidereal period (days), and phase at J2000
/// (radians) for a body.
fn orbit_elements(body: SolarBody) -> (f64, f64, f64) {
    match body {
        SolarBody::Sun => (0.0, 1.0, 0.0),
        SolarBody::Mercury => (0.387, 87.969, 0.0),
        SolarBody::Venus => (0.723, 224.701, 0.9),
        SolarBody::Earth => (1.0, 365.256, 1.8),
        SolarBody::Mars => (1.524, 686.980, 2.7),
        SolarBody::Jupiter => (5.203, 4_332.59, 3.6),
        SolarBody::Saturn => (9.537, 10_759.2, 4.5),
        SolarBody::Uranus => (19.19, 30_688.5, 5.4),
        SolarBody::Neptune => (30.07, 60_182.0, 0.3),
    }
}

/// Deterministic in-memory position source.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularEphemeris {
    missing: Option<SolarBody>,
}

impl CircularEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that fails to resolve `body`, for exercising the
    /// all-or-nothing snapshot failure path.
    pub fn without(body: SolarBody) -> Self {
        Self {
            missing: Some(body),
        }
    }
}

impl PositionSource for CircularEphemeris {
    fn barycentric(&self, body: SolarBody, jd_tdb: f64) -> Result<BodyState, EphemerisError> {
        if self.missing == Some(body) {
            return Err(EphemerisError::BodyNotFound(body.name()));
        }

        if body == SolarBody::Sun {
            return Ok(BodyState {
                position: Vector3::zeros(),
                velocity: Vector3::zeros(),
            });
        }

        let (radius, period, phase) = orbit_elements(body);
        let theta = phase + TAU * (jd_tdb - J2000_JD) / period;
        let angular_rate = TAU / period;

        Ok(BodyState {
            position: Vector3::new(radius * theta.cos(), radius * theta.sin(), 0.0),
            velocity: Vector3::new(
                -radius * angular_rate * theta.sin(),
                radius * angular_rate * theta.cos(),
                0.0,
            ),
        })
    }
}
