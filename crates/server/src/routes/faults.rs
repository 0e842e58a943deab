use axum::{extract::{rejection::PathRejection, Path, State}, Json};
use service::dto::FaultDto;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/fault", tag = "fault",
    responses((status = 200, description = "All faults"), (status = 404, description = "No faults found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<FaultDto>>, JsonApiError> {
    Ok(Json(state.tracker.faults.get_all().await?))
}

#[utoipa::path(get, path = "/api/fault/{id}", tag = "fault",
    params(("id" = i32, Path, description = "Fault id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<FaultDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.faults.get(id).await?))
}
