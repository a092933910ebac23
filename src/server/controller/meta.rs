use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{HealthDto, IndexDto, RouteNotFoundDto},
    server::state::AppState,
};

/// Tag for grouping service metadata endpoints in OpenAPI documentation
pub static META_TAG: &str = "meta";

/// Service banner with version and entry points.
#[utoipa::path(
    get,
    path = "/",
    tag = META_TAG,
    responses((status = 200, description = "Service banner", body = IndexDto)),
)]
pub async fn index() -> impl IntoResponse {
    let endpoints = [
        ("auth", "/api/auth"),
        ("services", "/api/services"),
        ("barbers", "/api/barbers"),
        ("appointments", "/api/appointments"),
        ("health", "/health"),
        ("docs", "/docs"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(IndexDto {
        success: true,
        message: "Barbershop booking API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

/// Liveness and database connectivity.
///
/// Always answers 200; `status` is `degraded` when the database doesn't respond to a ping.
#[utoipa::path(
    get,
    path = "/health",
    tag = META_TAG,
    responses((status = 200, description = "Health report", body = HealthDto)),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            false
        }
    };

    Json(HealthDto {
        success: connected,
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        status: if connected { "ok" } else { "degraded" }.to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundDto {
            success: false,
            error: "Route not found".to_string(),
            path: uri.path().to_string(),
            method: method.to_string(),
        }),
    )
}
