//! Axum router assembly.

use axum::Router;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::Storage;

use crate::error::{ErrorBody, NOT_FOUND_MESSAGE};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1`; any other path answers the JSON
/// `404` body. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: Storage + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn not_found() -> Response {
    ErrorBody::response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}
