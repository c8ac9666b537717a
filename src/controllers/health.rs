use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::db::{check_connection, DbPool};

/// What the readiness probe needs to answer.
pub struct HealthState {
    pub pool: Arc<DbPool>,
    pub premium_delay_ms: u64,
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once the history store answers. Premium generation is always simulated.
pub async fn health_ready(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let premium = json!({
        "mode": "simulated",
        "delayMs": state.premium_delay_ms
    });

    match check_connection(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected",
                "premium": premium
            })),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "database": "disconnected",
                    "premium": premium
                })),
            )
        }
    }
}
