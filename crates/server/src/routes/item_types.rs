use axum::{extract::{rejection::{JsonRejection, PathRejection}, Path, State}, http::StatusCode, Json};
use service::{domain::ItemTypeData, dto::ItemTypeDto};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/itemtype", tag = "itemtype",
    responses((status = 200, description = "All item types"), (status = 404, description = "No item types found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ItemTypeDto>>, JsonApiError> {
    Ok(Json(state.tracker.item_types.get_all().await?))
}

#[utoipa::path(get, path = "/api/itemtype/{id}", tag = "itemtype",
    params(("id" = i32, Path, description = "Item type id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<ItemTypeDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.item_types.get(id).await?))
}

#[utoipa::path(post, path = "/api/itemtype", tag = "itemtype",
    request_body = crate::openapi::ItemTypeDataDoc,
    responses((status = 201, description = "Item Type Created"), (status = 400, description = "Invalid or duplicate item type")))]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ItemTypeData>, JsonRejection>,
) -> Result<(StatusCode, Json<&'static str>), JsonApiError> {
    let Json(data) = payload?;
    Ok((StatusCode::CREATED, Json(state.tracker.item_types.create(data).await?)))
}

#[utoipa::path(put, path = "/api/itemtype/{id}", tag = "itemtype",
    params(("id" = i32, Path, description = "Item type id")),
    request_body = crate::openapi::ItemTypeDataDoc,
    responses((status = 200, description = "The Item Type has been updated."), (status = 400, description = "Unknown id or invalid input")))]
pub async fn replace(
    State(state): State<ServerState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ItemTypeData>, JsonRejection>,
) -> Result<Json<&'static str>, JsonApiError> {
    let Path(id) = path?;
    let Json(data) = payload?;
    Ok(Json(state.tracker.item_types.replace(id, data).await?))
}
