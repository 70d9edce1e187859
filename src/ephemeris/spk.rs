//! JPL SPK kernel backend.
//!
//! Wraps a `starfield` SPICE kernel behind [`PositionSource`]. The kernel is
//! opened once at startup; [`SpkEphemeris::load`] probes every required body
//! at J2000 so a truncated or mismatched kernel fails the process before it
//! starts serving, not on the first request.

use parking_lot::Mutex;
use starfield::jplephem::SpiceKernel;
use starfield::planetlib::{Body, Ephemeris};
use starfield::Timescale;

use super::{BodyState, EphemerisError, PositionSource};
use crate::models::{SolarBody, J2000_JD};

/// Map a domain body to the kernel body used for segment lookup.
///
/// The outer planets resolve to their barycenters, matching what DE kernels
/// actually carry for them.
fn kernel_body(body: SolarBody) -> Body {
    match body {
        SolarBody::Sun => Body::Sun,
        SolarBody::Mercury => Body::Mercury,
        SolarBody::Venus => Body::Venus,
        SolarBody::Earth => Body::Earth,
        SolarBody::Mars => Body::Mars,
        SolarBody::Jupiter => Body::Jupiter,
        SolarBody::Saturn => Body::Saturn,
        SolarBody::Uranus => Body::Uranus,
        SolarBody::Neptune => Body::Neptune,
    }
}

/// Ephemeris backed by a JPL SPK/BSP kernel.
pub struct SpkEphemeris {
    // Lookups take `&mut` because the kernel caches Chebyshev segments;
    // the data itself is read-only after load.
    kernel: Mutex<Ephemeris>,
    timescale: Timescale,
}

impl std::fmt::Debug for SpkEphemeris {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpkEphemeris").finish_non_exhaustive()
    }
}

impl SpkEphemeris {
    /// Open the kernel at `path` and verify it can resolve every body in
    /// [`SolarBody::ALL`].
    ///
    /// # Errors
    /// Returns [`EphemerisError::Load`] if the file cannot be opened or any
    /// required body is missing from the kernel.
    pub fn load(path: &str) -> Result<Self, EphemerisError> {
        let kernel = SpiceKernel::open(path).map_err(|e| EphemerisError::Load {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut ephemeris = Ephemeris::from_kernel(kernel);

        let timescale = Timescale::default();
        let probe_epoch = timescale.tdb_jd(J2000_JD);
        for body in SolarBody::ALL {
            ephemeris
                .get_state(kernel_body(body), &probe_epoch)
                .map_err(|e| EphemerisError::Load {
                    path: path.to_string(),
                    message: format!("cannot resolve {}: {}", body.name(), e),
                })?;
        }

        Ok(Self {
            kernel: Mutex::new(ephemeris),
            timescale,
        })
    }
}

impl PositionSource for SpkEphemeris {
    fn barycentric(&self, body: SolarBody, jd_tdb: f64) -> Result<BodyState, EphemerisError> {
        let epoch = self.timescale.tdb_jd(jd_tdb);
        let state = self
            .kernel
            .lock()
            .get_state(kernel_body(body), &epoch)
            .map_err(|e| EphemerisError::Lookup {
                body: body.name(),
                message: e.to_string(),
            })?;

        Ok(BodyState {
            position: state.position.coords,
            velocity: state.velocity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_missing_file() {
        let err = SpkEphemeris::load("/nonexistent/kernel.bsp").unwrap_err();
        match err {
            EphemerisError::Load { path, .. } => {
                assert_eq!(path, "/nonexistent/kernel.bsp");
            }
            other => panic!("expected Load error, got {other:?}"),
        }
    }
}
