//! Time scale handling for ephemeris lookups.
//!
//! Ephemeris kernels are indexed by Barycentric Dynamical Time (TDB), a
//! continuous time scale, while requests arrive on the UTC wall clock. An
//! [`ObservationInstant`] pairs the two: the UTC timestamp shown to users
//! and the TDB Julian date used for kernel lookups.
//!
//! The conversion applies the fixed TT−UTC offset (32.184 s TAI→TT plus the
//! 37 leap seconds in effect since 2017) and treats TDB as equal to TT; the
//! periodic TDB−TT term stays below 2 ms, orders of magnitude under the
//! 0.1 s display precision of this service.

use chrono::{DateTime, Utc};

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian date of the Unix epoch (1970-01-01 00:00:00 UTC).
const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// TT − UTC in seconds: 32.184 s plus 37 leap seconds (valid since 2017).
const TT_MINUS_UTC_SECONDS: f64 = 69.184;

/// A single observation instant: the request's "now".
///
/// Created fresh on every request; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObservationInstant {
    utc: DateTime<Utc>,
    jd_tdb: f64,
}

impl ObservationInstant {
    /// Build an instant from a UTC wall-clock timestamp.
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        let unix_seconds =
            utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9;
        let jd_utc = unix_seconds / 86_400.0 + JD_UNIX_EPOCH;
        let jd_tdb = jd_utc + TT_MINUS_UTC_SECONDS / 86_400.0;
        Self { utc, jd_tdb }
    }

    /// TDB Julian date for ephemeris lookups.
    pub fn jd_tdb(&self) -> f64 {
        self.jd_tdb
    }

    /// UTC wall-clock timestamp.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }

    /// Human-readable timestamp in `YYYY-MM-DD HH:MM:SS UTC` form.
    pub fn timestamp_string(&self) -> String {
        self.utc.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Source of "now", injected so handlers stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests and reproductions.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
