//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::models::PlanetRecord;
use crate::services::PlanetSnapshot;

/// Response body for `/api/planets`, also the input to the HTML views.
///
/// Exactly one of `current_time`/`error` is populated: a successful
/// snapshot carries the timestamp, a failed one carries the message and an
/// empty planet list. The endpoint answers 200 either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetsResponse {
    /// Whether the snapshot computation succeeded
    pub success: bool,
    /// One record per tracked planet; empty on failure
    pub planets: Vec<PlanetRecord>,
    /// Observation timestamp (`YYYY-MM-DD HH:MM:SS UTC`); null on failure
    pub current_time: Option<String>,
    /// User-visible error message; null on success
    pub error: Option<String>,
}

impl PlanetsResponse {
    /// Successful response from a computed snapshot.
    pub fn from_snapshot(snapshot: PlanetSnapshot) -> Self {
        Self {
            success: true,
            planets: snapshot.planets,
            current_time: Some(snapshot.current_time),
            error: None,
        }
    }

    /// Failure response with an empty planet list.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            planets: Vec::new(),
            current_time: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Ephemeris availability
    pub ephemeris: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_response_shape() {
        let response = PlanetsResponse::failure("Error loading planetary data: boom");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], serde_json::json!(false));
        assert_eq!(json["planets"], serde_json::json!([]));
        assert_eq!(json["current_time"], serde_json::Value::Null);
        assert_eq!(
            json["error"],
            serde_json::json!("Error loading planetary data: boom")
        );
    }

    #[test]
    fn test_success_response_shape() {
        let snapshot = PlanetSnapshot {
            planets: Vec::new(),
            current_time: "2024-01-01 00:00:00 UTC".to_string(),
        };
        let json = serde_json::to_value(PlanetsResponse::from_snapshot(snapshot)).unwrap();

        assert_eq!(json["success"], serde_json::json!(true));
        assert_eq!(json["current_time"], serde_json::json!("2024-01-01 00:00:00 UTC"));
        assert_eq!(json["error"], serde_json::Value::Null);
    }
}
