use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, ServerState};
use service::catalog::CatalogRepositories;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    let (categories, products) = CatalogRepositories::in_memory().into_services();
    routes::build_router(ServerState::new(categories, products), cors())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            req = req.header("content-type", "application/json");
            Body::from(raw.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body)?).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn create_category_returns_created_record() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Books"}));

    let (status, body) = send(&app, "GET", "/categories", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "name": "Books"}]));
    Ok(())
}

#[tokio::test]
async fn create_product_under_category_nests_category() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;

    let (status, body) =
        send(&app, "POST", "/categories/1/products", Some(r#"{"name":"Clean Code","price":89.90}"#)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Clean Code"));
    assert_eq!(body["price"].to_string(), "89.90");
    assert_eq!(body["category"], json!({"id": 1, "name": "Books"}));
    Ok(())
}

#[tokio::test]
async fn unknown_category_is_404_and_nothing_is_written() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) =
        send(&app, "POST", "/categories/99/products", Some(r#"{"name":"Ghost","price":1.00}"#)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], json!(404));
    assert_eq!(body["error"], json!("Not Found"));
    assert_eq!(body["message"], json!("Category not found"));
    assert!(body["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));

    let (status, body) = send(&app, "POST", "/products?categoryId=99", Some(r#"{"name":"Ghost","price":1.00}"#)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Category not found"));

    let (_, all) = send(&app, "GET", "/products", None).await?;
    assert_eq!(all, json!([]));

    let (status, _) = send(&app, "GET", "/categories/99/products", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn empty_category_lists_no_products() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    let (status, body) = send(&app, "GET", "/categories/1/products", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn products_are_scoped_and_listed_with_owner() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/categories", Some(r#"{"name":"Computing"}"#)).await?;
    send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;

    let (status, mouse) =
        send(&app, "POST", "/products?categoryId=1", Some(r#"{"name":"Logitech Mouse","price":120.00}"#)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(mouse["category"]["name"], json!("Computing"));
    send(&app, "POST", "/categories/2/products", Some(r#"{"name":"Clean Code","price":89.90}"#)).await?;

    let (_, computing) = send(&app, "GET", "/categories/1/products", None).await?;
    let names: Vec<_> = computing.as_array().into_iter().flatten().map(|p| p["name"].clone()).collect();
    assert_eq!(names, vec![json!("Logitech Mouse")]);

    let (_, all) = send(&app, "GET", "/products", None).await?;
    let all = all.as_array().cloned().unwrap_or_default();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1]["category"], json!({"id": 2, "name": "Books"}));
    assert_eq!(all[1]["price"].to_string(), "89.90");
    Ok(())
}

#[tokio::test]
async fn body_category_is_ignored() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    send(&app, "POST", "/categories", Some(r#"{"name":"Computing"}"#)).await?;

    let raw = r#"{"name":"Clean Code","price":89.90,"category":{"id":2,"name":"Computing"}}"#;
    let (status, body) = send(&app, "POST", "/categories/1/products", Some(raw)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["category"], json!({"id": 1, "name": "Books"}));
    Ok(())
}

#[tokio::test]
async fn identical_posts_get_distinct_ids() -> anyhow::Result<()> {
    let app = build_app();
    let (_, a) = send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    let (_, b) = send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    assert_ne!(a["id"], b["id"]);
    Ok(())
}

#[tokio::test]
async fn invalid_input_is_400() -> anyhow::Result<()> {
    let app = build_app();
    let (status, body) = send(&app, "POST", "/categories", Some(r#"{"name":"  "}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Bad Request"));

    send(&app, "POST", "/categories", Some(r#"{"name":"Books"}"#)).await?;
    let (status, _) = send(&app, "POST", "/categories/1/products", Some(r#"{"name":"Clean Code","price":-1}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        send(&app, "POST", "/categories/1/products", Some(r#"{"name":"Clean Code","price":89.900}"#)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, all) = send(&app, "GET", "/products", None).await?;
    assert_eq!(all, json!([]));
    Ok(())
}

#[tokio::test]
async fn whole_prices_come_back_with_cents() -> anyhow::Result<()> {
    let app = build_app();
    send(&app, "POST", "/categories", Some(r#"{"name":"Computing"}"#)).await?;
    let (status, body) =
        send(&app, "POST", "/products?categoryId=1", Some(r#"{"name":"Logitech Mouse","price":120}"#)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["price"].to_string(), "120.00");
    Ok(())
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let (status, body) = send(&build_app(), "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}
