use axum::{extract::{rejection::PathRejection, Path, State}, Json};
use service::dto::ItemDto;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/item", tag = "item",
    responses((status = 200, description = "All items with their item type"), (status = 404, description = "No items found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ItemDto>>, JsonApiError> {
    Ok(Json(state.tracker.items.get_all().await?))
}

#[utoipa::path(get, path = "/api/item/{id}", tag = "item",
    params(("id" = i32, Path, description = "Item id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<ItemDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.items.get(id).await?))
}
