use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

use deskbook_db::store::BookingStore;

use crate::ApiState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[derive(Serialize)]
struct VersionResponse {
    version: String,
}

/// Reports store health, not just process liveness: once a store call has
/// failed the status flips to degraded (503) until the next call succeeds,
/// so clients can tell a down store from a one-off request failure.
async fn health_check<S: BookingStore + Send + Sync + 'static>(
    State(state): State<Arc<ApiState<S>>>,
) -> Response {
    if state.ledger.health().is_degraded() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "degraded".to_string(),
            }),
        )
            .into_response()
    } else {
        Json(HealthResponse {
            status: "ok".to_string(),
        })
        .into_response()
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn routes<S: BookingStore + Send + Sync + 'static>() -> Router<Arc<ApiState<S>>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
