use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use service::{domain::ResolutionData, dto::ResolutionDto};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/resolution", tag = "resolution",
    responses((status = 200, description = "All resolutions"), (status = 404, description = "No resolutions found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ResolutionDto>>, JsonApiError> {
    Ok(Json(state.tracker.resolutions.get_all().await?))
}

#[utoipa::path(get, path = "/api/resolution/{id}", tag = "resolution",
    params(("id" = i32, Path, description = "Resolution id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<ResolutionDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.resolutions.get(id).await?))
}

#[utoipa::path(post, path = "/api/resolution", tag = "resolution",
    request_body = crate::openapi::ResolutionDataDoc,
    responses((status = 201, description = "Resolution Created"), (status = 400, description = "Invalid or duplicate resolution")))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ResolutionData>, JsonRejection>,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    let Json(data) = payload?;
    Ok((StatusCode::CREATED, Json(state.tracker.resolutions.create(data).await?)))
}

#[utoipa::path(put, path = "/api/resolution/{id}", tag = "resolution",
    params(("id" = i32, Path, description = "Resolution id")),
    request_body = crate::openapi::ResolutionDataDoc,
    responses((status = 200, description = "The Resolution has been updated."), (status = 400, description = "Unknown id or invalid input")))]
pub async fn replace(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ResolutionData>, JsonRejection>,
) -> Result<Json<&'static str>, JsonApiError> {
    let Path(id) = path?;
    let Json(data) = payload?;
    Ok(Json(state.tracker.resolutions.replace(id, data).await?))
}
