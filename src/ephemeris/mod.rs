//! Ephemeris access layer.
//!
//! A [`PositionSource`] answers one question: where was a solar-system body,
//! relative to the solar-system barycenter, at a given TDB Julian date. Two
//! backends implement it:
//!
//! - [`SpkEphemeris`]: a JPL SPK kernel (e.g. `de421.bsp`) loaded once at
//!   startup; the production backend
//! - [`CircularEphemeris`]: deterministic circular orbits for tests and
//!   offline development
//!
//! [`apparent`] builds Earth-apparent places (light-time and aberration
//! corrected RA/Dec) on top of the raw barycentric states.

pub mod apparent;
pub mod spk;
pub mod synthetic;

pub use apparent::{observe, ApparentPlace};
pub use spk::SpkEphemeris;
pub use synthetic::CircularEphemeris;

use nalgebra::Vector3;
use thiserror::Error;

use crate::models::SolarBody;

/// Error type for ephemeris loading and lookups.
#[derive(Debug, Error)]
pub enum EphemerisError {
    /// The kernel file could not be opened or parsed at startup.
    #[error("failed to load ephemeris kernel {path}: {message}")]
    Load { path: String, message: String },

    /// The source has no trajectory for the requested body.
    #[error("body not available in ephemeris: {0}")]
    BodyNotFound(&'static str),

    /// The underlying kernel rejected a lookup (bad epoch, segment error).
    #[error("ephemeris lookup failed for {body}: {message}")]
    Lookup { body: &'static str, message: String },
}

/// A body's barycentric state at one instant.
///
/// Position in AU, velocity in AU/day, ICRF axes, solar-system barycenter
/// origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// Read-only source of barycentric body states.
///
/// Implementations are shared across request handlers behind an `Arc`, so
/// they must be `Send + Sync`; any internal caching is the implementation's
/// concern.
pub trait PositionSource: Send + Sync {
    /// Barycentric state of `body` at the TDB Julian date `jd_tdb`.
    fn barycentric(&self, body: SolarBody, jd_tdb: f64) -> Result<BodyState, EphemerisError>;
}
