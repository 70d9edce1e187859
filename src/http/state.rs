//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::PositionSource;
use crate::models::{Clock, SystemClock};

/// Shared application state passed to all handlers.
///
/// Both members are read-only after construction; cloning the state clones
/// two `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Loaded ephemeris shared across requests
    pub ephemeris: Arc<dyn PositionSource>,
    /// Source of "now" (system clock in production, fixed in tests)
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create application state with the system clock.
    pub fn new(ephemeris: Arc<dyn PositionSource>) -> Self {
        Self {
            ephemeris,
            clock: Arc::new(SystemClock),
        }
    }

    /// Create application state with an explicit clock.
    pub fn with_clock(ephemeris: Arc<dyn PositionSource>, clock: Arc<dyn Clock>) -> Self {
        Self { ephemeris, clock }
    }
}
