use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::catalog::{Category, CategoryId, NewCategory, NewProduct, ProductView};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Look up a category or fail with the 404 error body.
pub(crate) async fn resolve_category(state: &ServerState, id: CategoryId) -> Result<Category, JsonApiError> {
    state
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(JsonApiError::category_not_found)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewCategory>,
) -> Result<(StatusCode, Json<Category>), JsonApiError> {
    let category = state.categories.create(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, JsonApiError> {
    let list = state.categories.list().await?;
    info!(count = list.len(), "list categories");
    Ok(Json(list))
}

/// `POST /categories/:id/products`; nothing is written when the category is unknown.
pub async fn create_product(
    State(state): State<ServerState>,
    Path(id): Path<CategoryId>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductView>), JsonApiError> {
    let category = resolve_category(&state, id).await?;
    let product = state.products.create(input, &category).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(state): State<ServerState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<Vec<ProductView>>, JsonApiError> {
    let category = resolve_category(&state, id).await?;
    let list = state.products.list_by_category(category.id).await?;
    info!(category_id = category.id, count = list.len(), "list category products");
    Ok(Json(list))
}
