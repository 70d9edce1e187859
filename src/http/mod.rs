//! HTTP server module.
//!
//! An axum-based server exposing the planet snapshot three ways: an HTML
//! table (`/`), a 3D visualization (`/3d`), and a JSON API
//! (`/api/planets`), plus a `/health` probe.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers + HTML views)                  │
//! │  - One shared snapshot call, three presentation adapters  │
//! │  - CORS, compression, tracing                             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::snapshot)                       │
//! │  - Apparent + heliocentric coordinates, formatting        │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Ephemeris Layer (ephemeris::PositionSource)              │
//! │  - SPK kernel loaded once at startup                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshot failures never become transport-level errors on the three
//! planet routes: handlers substitute an empty record list plus an error
//! string and still answer 200.

pub mod dto;

pub mod handlers;

pub mod router;

pub mod state;

pub mod views;

pub use router::create_router;

pub use state::AppState;
