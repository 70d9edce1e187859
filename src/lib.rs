//! # Planet Tracker
//!
//! A small web service that reports the current apparent positions of the
//! seven non-Earth planets (Mercury through Neptune), computed from a JPL
//! SPK ephemeris kernel. The service exposes an HTML table view, a 3D
//! visualization, and a JSON API over the same per-request snapshot.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`config`]: Immutable server configuration loaded from the environment
//! - [`models`]: Domain types: tracked bodies, per-planet records, time scales
//! - [`ephemeris`]: Position sources (SPK kernel, synthetic) and the
//!   apparent-position computation
//! - [`services`]: Snapshot assembly and coordinate formatting
//! - [`http`]: Axum-based HTTP server, handlers, and HTML views
//!
//! The ephemeris is loaded once at startup and shared read-only across
//! request handlers; each request computes a fresh snapshot for "now".

pub mod config;
pub mod ephemeris;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
