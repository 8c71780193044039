//! Health check handlers

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::{db, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

impl HealthResponse {
    fn new(database_up: bool) -> Self {
        Self {
            status: if database_up { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            database: if database_up { "up" } else { "down" },
        }
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_up = match db::ping(state.db()).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };

    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(HealthResponse::new(database_up)))
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_reflects_database() {
        let up = serde_json::to_value(HealthResponse::new(true)).unwrap();
        assert_eq!(up["status"], "healthy");
        assert_eq!(up["database"], "up");

        let down = serde_json::to_value(HealthResponse::new(false)).unwrap();
        assert_eq!(down["status"], "degraded");
        assert_eq!(down["database"], "down");
    }
}
