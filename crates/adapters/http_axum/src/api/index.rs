//! Liveness and statistics handlers.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::Storage;
use hbnb_app::services::stats_service::Counts;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api/v1/status`.
#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
}

/// `GET /api/v1/status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// `GET /api/v1/stats`, the record count per collection.
pub async fn stats<S>(State(state): State<AppState<S>>) -> Result<Json<Counts>, ApiError>
where
    S: Storage + Send + Sync + 'static,
{
    let counts = state.stats.counts().await?;
    Ok(Json(counts))
}
