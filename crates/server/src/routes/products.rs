use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::catalog::{CategoryId, NewProduct, ProductView};
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::{categories::resolve_category, ServerState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuery {
    pub category_id: CategoryId,
}

/// `POST /products?categoryId=`
pub async fn create(
    State(state): State<ServerState>,
    Query(q): Query<CreateQuery>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductView>), JsonApiError> {
    let category = resolve_category(&state, q.category_id).await?;
    let product = state.products.create(input, &category).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ProductView>>, JsonApiError> {
    let list = state.products.list().await?;
    info!(count = list.len(), "list products");
    Ok(Json(list))
}
