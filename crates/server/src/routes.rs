use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::catalog::{CategoryService, ProductService};

pub mod categories;
pub mod products;

/// Shared handler state; services are built once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
}

impl ServerState {
    pub fn new(categories: CategoryService, products: ProductService) -> Self {
        Self { categories: Arc::new(categories), products: Arc::new(products) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/:id/products",
            get(categories::list_products).post(categories::create_product),
        )
        .route("/products", get(products::list).post(products::create));

    Router::new()
        .route("/health", get(health))
        .merge(catalog)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
