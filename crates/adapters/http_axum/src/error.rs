//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hbnb_domain::error::{HbnbError, ValidationError};

/// Body of every 404, whatever was not found.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    error: String,
}

impl ErrorBody {
    pub(crate) fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(Self {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

/// Maps [`HbnbError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HbnbError);

impl From<HbnbError> for ApiError {
    fn from(err: HbnbError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            HbnbError::Validation(err) => ErrorBody::response(StatusCode::BAD_REQUEST, err.to_string()),
            HbnbError::NotFound(err) => {
                tracing::debug!(error = %err, "not found");
                ErrorBody::response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
            HbnbError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                ErrorBody::response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}
