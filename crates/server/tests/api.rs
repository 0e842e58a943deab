use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::store::failing::FailingTrackerStore;
use service::store::memory::{Collection, InMemoryTrackerStore};
use tower::ServiceExt;

use server::errors::STORE_FAULT_MESSAGE;
use server::startup::build_app;

fn app() -> Router {
    build_app(Arc::new(InMemoryTrackerStore::seeded()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn list_items_cuts_item_type_back_collection() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/api/item", None).await?;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().cloned().unwrap_or_default();
    assert_eq!(items.len(), 10);
    let first = items.iter().find(|i| i["itemId"] == 1).cloned().unwrap_or(Value::Null);
    assert_eq!(first["itemType"]["itemTypeId"], 1);
    assert!(first["itemType"].get("items").is_none());
    Ok(())
}

#[tokio::test]
async fn get_item_found_and_missing() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/item/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemId"], 1);
    assert!(body["itemType"]["itemTypeName"].is_string());

    let (status, body) = send(&app, "GET", "/api/item/25", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No item found for id: 25");
    Ok(())
}

#[tokio::test]
async fn empty_collection_is_404_with_message() -> anyhow::Result<()> {
    let app = build_app(Arc::new(InMemoryTrackerStore::seeded().without(Collection::Resolutions)));
    let (status, body) = send(&app, "GET", "/api/resolution", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No resolutions found.");
    Ok(())
}

#[tokio::test]
async fn resolution_wire_names() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/api/resolution/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resolutionId"], 1);
    assert!(body["resolutionName"].is_string());
    assert!(body["resolutionDescription"].is_string());
    Ok(())
}

#[tokio::test]
async fn create_item_type_then_duplicate() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"name": "Test Name", "model": "Test Model", "manufacturer": "Test Manufacturer"});

    let (status, body) = send(&app, "POST", "/api/itemtype", Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Item Type Created"));

    let (status, _) = send(&app, "POST", "/api/itemtype", Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, "GET", "/api/itemtype", None).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(6));
    Ok(())
}

#[tokio::test]
async fn create_with_missing_fields_is_400() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/api/itemtype", Some(json!({"name": "Only a name"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    let (status, _) = send(&app, "POST", "/api/resolution", Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_400() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/resolution")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn create_resolution() -> anyhow::Result<()> {
    let payload = json!({"name": "Test Resolution", "description": "This is a test resolution"});
    let (status, body) = send(&app(), "POST", "/api/resolution", Some(payload)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!("Resolution Created"));
    Ok(())
}

#[tokio::test]
async fn replace_item_type_existing_and_missing() -> anyhow::Result<()> {
    let app = app();
    let payload = json!({"name": "Test Name", "model": "Test Model", "manufacturer": "Test Manufacturer"});

    let (status, body) = send(&app, "PUT", "/api/itemtype/1", Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("The Item Type has been updated."));

    let (status, _) = send(&app, "PUT", "/api/itemtype/1234", Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/api/itemtype/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["itemTypeName"], "Test Name");
    Ok(())
}

#[tokio::test]
async fn replace_resolution_missing_is_400_not_404() -> anyhow::Result<()> {
    let payload = json!({"name": "n", "description": "d"});
    let (status, _) = send(&app(), "PUT", "/api/resolution/1234", Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn customer_repairs_route() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/customer/1/repairs", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));

    let (status, _) = send(&app, "GET", "/api/customer/5/repairs", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn every_entity_lists() -> anyhow::Result<()> {
    let app = app();
    for path in ["/api/customer", "/api/fault", "/api/item", "/api/itemtype", "/api/repair", "/api/resolution"] {
        let (status, body) = send(&app, "GET", path, None).await?;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(body.as_array().is_some_and(|a| !a.is_empty()), "{path}");
    }
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_paths() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/itemtype/{id}").is_some());
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_400_with_json_body() -> anyhow::Result<()> {
    let app = app();
    for uri in ["/api/item/abc", "/api/customer/abc/repairs", "/api/resolution/99999999999"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Bad Request", "{uri}");
        assert!(body["message"].is_string(), "{uri}");
    }

    let payload = json!({"name": "n", "model": "m", "manufacturer": "x"});
    let (status, body) = send(&app, "PUT", "/api/itemtype/abc", Some(payload)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn store_fault_is_500_without_leaking_detail() -> anyhow::Result<()> {
    let app = build_app(Arc::new(FailingTrackerStore::new("sqlx: pool timed out at 10.0.0.5")));
    for uri in ["/api/item", "/api/itemtype/1", "/api/customer/1/repairs"] {
        let (status, body) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body["error"], "Internal Server Error", "{uri}");
        assert_eq!(body["message"], STORE_FAULT_MESSAGE, "{uri}");
    }

    let payload = json!({"name": "n", "description": "d"});
    let (status, _) = send(&app, "POST", "/api/resolution", Some(payload)).await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
