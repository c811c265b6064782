//! Generic JSON REST handlers, instantiated once per record type.
//!
//! Bodies are taken as raw bytes and parsed with [`Payload::from_slice`], so
//! an unparseable body becomes a `400 Not a JSON` regardless of the
//! `Content-Type` header, and an update on an unknown id answers `404`
//! before the body is looked at.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use hbnb_app::ports::Storage;
use hbnb_domain::payload::Payload;
use hbnb_domain::record::{Child, Creatable, Patchable, Record};

use crate::error::ApiError;
use crate::state::AppState;

/// Flat serialized record, as produced by [`Record::to_dict`].
pub type Dict = Map<String, Value>;

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Dict>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

impl<R: Record> From<Vec<R>> for ListResponse {
    fn from(records: Vec<R>) -> Self {
        Self::Ok(Json(records.iter().map(Record::to_dict).collect()))
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Dict>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoints.
pub enum CreateResponse {
    Created(Json<Dict>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    /// `200` with an empty object.
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => (StatusCode::OK, Json(Dict::new())).into_response(),
        }
    }
}

/// `GET /api/v1/{collection}`
pub async fn list<S, R>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    R: Record,
{
    let records = state.resources.list::<R>().await?;
    Ok(records.into())
}

/// `GET /api/v1/{parents}/:id/{collection}`
pub async fn list_children<S, P, C>(
    State(state): State<AppState<S>>,
    Path(parent_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    P: Record,
    C: Child<P>,
{
    let records = state.resources.list_children::<P, C>(&parent_id).await?;
    Ok(records.into())
}

/// `GET /api/v1/{collection}/:id`
pub async fn get<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    R: Record,
{
    let record = state.resources.get::<R>(&id).await?;
    Ok(GetResponse::Ok(Json(record.to_dict())))
}

/// `POST /api/v1/{collection}`
pub async fn create<S, R>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    R: Creatable<Scope = ()>,
{
    let payload = Payload::from_slice(&body)?;
    let record = state.resources.create::<R>(&payload).await?;
    Ok(CreateResponse::Created(Json(record.to_dict())))
}

/// `POST /api/v1/{parents}/:id/{collection}`
pub async fn create_in<S, P, C>(
    State(state): State<AppState<S>>,
    Path(parent_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    P: Record,
    C: Creatable<Scope = P::Id> + Child<P>,
{
    let payload = Payload::from_slice(&body)?;
    let record = state
        .resources
        .create_in::<P, C>(&parent_id, &payload)
        .await?;
    Ok(CreateResponse::Created(Json(record.to_dict())))
}

/// `PUT /api/v1/{collection}/:id`
pub async fn update<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<GetResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    R: Patchable,
{
    let record = state.resources.get::<R>(&id).await?;
    let payload = Payload::from_slice(&body)?;
    let updated = state.resources.update(record, &payload).await?;
    Ok(GetResponse::Ok(Json(updated.to_dict())))
}

/// `DELETE /api/v1/{collection}/:id`
pub async fn delete<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: Storage + Send + Sync + 'static,
    R: Record,
{
    state.resources.delete::<R>(&id).await?;
    Ok(DeleteResponse::Ok)
}
