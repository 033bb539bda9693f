use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::{
    app_state::SharedAppState,
    error::{ErrorResponse, TaskboardServerResult},
};

pub fn routes(app_state: SharedAppState) -> Router<SharedAppState> {
    Router::new()
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        health_check_handler
    ),
    components(
        schemas(HealthResponse, ErrorResponse)
    ),
    tags(
        (name = "Healthcheck", description = "Liveness of the service and its store")
    )
)]
pub struct HealthCheckOpenApi;

/// Answers once the database file is reachable.
#[utoipa::path(
    tag = "Healthcheck",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = ErrorResponse),
    ),
)]
pub async fn health_check_handler(
    State(state): State<SharedAppState>,
) -> TaskboardServerResult<Json<HealthResponse>> {
    state.db.ping().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        message: "API Services running".to_string(),
    }))
}
