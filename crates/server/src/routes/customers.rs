use axum::{extract::{rejection::PathRejection, Path, State}, Json};
use service::dto::{CustomerDto, RepairDto};

use crate::errors::JsonApiError;
use crate::routes::ServerState;

#[utoipa::path(get, path = "/api/customer", tag = "customer",
    responses((status = 200, description = "All customers"), (status = 404, description = "No customers found.")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CustomerDto>>, JsonApiError> {
    Ok(Json(state.tracker.customers.get_all().await?))
}

#[utoipa::path(get, path = "/api/customer/{id}", tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<CustomerDto>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.customers.get(id).await?))
}

#[utoipa::path(get, path = "/api/customer/{id}/repairs", tag = "customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "Repairs for the customer"), (status = 404, description = "Not Found")))]
pub async fn repairs(State(state): State<ServerState>, path: Result<Path<i32>, PathRejection>) -> Result<Json<Vec<RepairDto>>, JsonApiError> {
    let Path(id) = path?;
    Ok(Json(state.tracker.customers.get_repairs(id).await?))
}
