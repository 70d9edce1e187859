//! HTTP handlers for the web frontend and REST API.
//!
//! All three planet routes share one snapshot computation
//! ([`load_snapshot`]) and differ only in presentation. Failures are caught
//! here, logged, and rendered into the response body; the transport always
//! sees 200 on these routes.

use axum::{extract::State, response::Html, Json};

use super::dto::{HealthResponse, PlanetsResponse};
use super::state::AppState;
use super::views;
use crate::models::{ObservationInstant, SolarBody};
use crate::services;

/// Compute the snapshot off the async runtime and fold any failure into a
/// [`PlanetsResponse`].
async fn load_snapshot(state: &AppState) -> PlanetsResponse {
    let ephemeris = state.ephemeris.clone();
    let now = state.clock.now_utc();

    let result = tokio::task::spawn_blocking(move || {
        services::compute_snapshot(ephemeris.as_ref(), now)
    })
    .await;

    match result {
        Ok(Ok(snapshot)) => PlanetsResponse::from_snapshot(snapshot),
        Ok(Err(e)) => {
            tracing::warn!("snapshot computation failed: {e}");
            PlanetsResponse::failure(format!("Error loading planetary data: {e}"))
        }
        Err(e) => {
            tracing::error!("snapshot task join error: {e}");
            PlanetsResponse::failure(format!("Error loading planetary data: {e}"))
        }
    }
}

/// GET /
///
/// HTML table of the current apparent coordinates.
pub async fn index_page(State(state): State<AppState>) -> Html<String> {
    let response = load_snapshot(&state).await;
    Html(views::render_index(&response))
}

/// GET /3d
///
/// HTML page with a 3D scene built from the heliocentric coordinates.
pub async fn solar_system_page(State(state): State<AppState>) -> Html<String> {
    let response = load_snapshot(&state).await;
    Html(views::render_solar_system(&response))
}

/// GET /api/planets
///
/// JSON snapshot; `success: false` with an empty list on failure, HTTP 200
/// regardless.
pub async fn api_planets(State(state): State<AppState>) -> Json<PlanetsResponse> {
    Json(load_snapshot(&state).await)
}

/// GET /health
///
/// Liveness probe; reports whether the ephemeris currently resolves Earth.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let instant = ObservationInstant::from_utc(state.clock.now_utc());
    let ephemeris = match state
        .ephemeris
        .barycentric(SolarBody::Earth, instant.jd_tdb())
    {
        Ok(_) => "available".to_string(),
        Err(e) => format!("error: {e}"),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ephemeris,
    })
}
