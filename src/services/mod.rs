//! Service layer: snapshot assembly and coordinate formatting.

pub mod snapshot;

pub use snapshot::{compute_snapshot, PlanetSnapshot};
