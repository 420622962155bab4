//! REST API endpoints.
//!
//! Axum-based HTTP API exposing player profiles, similarity comparisons,
//! shot-zone reports, and the archetype catalog.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::provider::ProviderError;

use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::PlayerNotFound(name) => ApiError::NotFound(format!("player {name}")),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Assemble the full API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/players", get(routes::players::list_players))
        .route("/api/players/:name", get(routes::players::get_player))
        .route("/api/players/:name/zones", get(routes::zones::player_zones))
        .route("/api/compare", get(routes::compare::compare))
        .route("/api/archetypes", get(routes::archetypes::list_archetypes))
        .route("/api/meta", get(routes::meta::meta))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_mapping() {
        let err: ApiError = ProviderError::PlayerNotFound("Nobody".to_string()).into();
        assert!(matches!(err, ApiError::NotFound(_)));

        let err: ApiError = ProviderError::HttpStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Upstream(_)));
    }
}
