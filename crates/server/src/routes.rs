use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::{store::SharedStore, Tracker};

use crate::openapi::ApiDoc;

pub mod customers;
pub mod faults;
pub mod item_types;
pub mod items;
pub mod repairs;
pub mod resolutions;

#[derive(Clone)]
pub struct ServerState {
    pub tracker: Arc<Tracker>,
}

impl ServerState {
    pub fn new(store: SharedStore) -> Self {
        Self { tracker: Arc::new(Tracker::new(store)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/api/customer", get(customers::list))
        .route("/api/customer/:id", get(customers::get))
        .route("/api/customer/:id/repairs", get(customers::repairs))
        .route("/api/fault", get(faults::list))
        .route("/api/fault/:id", get(faults::get))
        .route("/api/item", get(items::list))
        .route("/api/item/:id", get(items::get))
        .route("/api/itemtype", get(item_types::list).post(item_types::create))
        .route("/api/itemtype/:id", get(item_types::get).put(item_types::replace))
        .route("/api/repair", get(repairs::list))
        .route("/api/repair/:id", get(repairs::get))
        .route("/api/resolution", get(resolutions::list).post(resolutions::create))
        .route("/api/resolution/:id", get(resolutions::get).put(resolutions::replace));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时记录状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
