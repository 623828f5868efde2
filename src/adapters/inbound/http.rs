use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::application::TrajectoryService;
use crate::common::{ApplicationError, DomainError};
use crate::domains::coverage::{Trajectory, TrajectoryCreate};

#[derive(Debug, Deserialize)]
pub struct CreateParams {
    /// Falls back to the service's configured default.
    pub tool_width: Option<f64>,
}

/// `ApplicationError` rendered as a `{"detail": ...}` JSON body.
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            e if e.is_not_found() => (StatusCode::NOT_FOUND, "Trajectory not found".to_string()),
            ApplicationError::Domain(DomainError::InvalidInput { reason }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, reason.clone())
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Routes under `/api/v1`, backed by `service`.
pub fn router(service: Arc<TrajectoryService>) -> Router {
    Router::new()
        .route("/api/v1/trajectories/", post(create_trajectory))
        .route("/api/v1/trajectories", post(create_trajectory))
        .route("/api/v1/trajectories/:id", get(get_trajectory))
        .with_state(service)
}

async fn create_trajectory(
    State(service): State<Arc<TrajectoryService>>,
    Query(params): Query<CreateParams>,
    Json(request): Json<TrajectoryCreate>,
) -> Result<(StatusCode, Json<Trajectory>), ApiError> {
    let trajectory = service.create_trajectory(request, params.tool_width).await?;
    Ok((StatusCode::CREATED, Json(trajectory)))
}

async fn get_trajectory(
    State(service): State<Arc<TrajectoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<Trajectory>, ApiError> {
    Ok(Json(service.get_trajectory(id).await?))
}

/// Serve the API on `bind` until Ctrl-C.
pub async fn serve(service: Arc<TrajectoryService>, bind: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
}
