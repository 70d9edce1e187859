//! Server configuration and environment variable handling.
//!
//! Configuration is read once at startup into an immutable [`ServerConfig`]
//! that is passed down explicitly; nothing in the crate reads the
//! environment after initialization.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Path to the SPK ephemeris kernel (e.g. `de421.bsp`)
    pub ephemeris_path: String,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    /// - `EPHEMERIS_PATH` (optional, default: de421.bsp): SPK kernel file
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;
        let ephemeris_path =
            env::var("EPHEMERIS_PATH").unwrap_or_else(|_| "de421.bsp".to_string());

        Ok(Self {
            host,
            port,
            ephemeris_path,
        })
    }

    /// Socket address string in `host:port` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
