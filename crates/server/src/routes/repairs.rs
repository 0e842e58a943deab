use axum::{extract::{rejection::PathRejection, Path, State}, Json};
use service::dto::RepairDto;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/repair", tag = "repair",
    responses((status = 200, description = "All repairs"), (status = 404, description = "No repairs found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<RepairDto>>, JsonApiError> {
    Ok(Json(state.tracker.repairs.get_all().await?))
}

#[utoipa::path(get, path = "/api/repair/{id}", tag = "repair",
    params(("id" = i32, Path, description = "Repair id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<RepairDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.repairs.get(id).await?))
}
