//! Health check handler.

use axum::Json;
use axum::extract::State;

use staffhub_database::connection::health_check;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Unauthenticated liveness probe. Database failures are reported in the
/// body rather than as an error status so the process itself still reads
/// as alive.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match health_check(&state.pool).await {
        Ok(true) => "ok",
        _ => "unavailable",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    })
}
