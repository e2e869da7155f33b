use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::envelope::Envelope;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::product::{NewProduct, Product, ProductId, ProductPatch};

/// List all products
///
/// GET /products
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Envelope<Product>>, ApiError> {
    let products = state.products.read().await?;
    tracing::debug!(count = products.len(), "Listed products");

    Ok(Json(Envelope::results(products)))
}

/// Get a product by ID
///
/// GET /products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.read_by_id(id).await?;

    Ok(Json(Envelope::single(product)))
}

/// Create a new product
///
/// POST /products
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let product = state.products.create(req).await?;
    tracing::info!(id = product.id, name = %product.name, "Created product");

    Ok((StatusCode::CREATED, Json(Envelope::single(product))))
}

/// Update a product
///
/// PUT /products/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(req): Json<ProductPatch>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.update(id, req).await?;
    tracing::info!(id, "Updated product");

    Ok(Json(Envelope::single(product)))
}

/// Delete a product
///
/// DELETE /products/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.products.delete(id).await?;
    tracing::info!(id, "Deleted product");

    Ok(Json(Envelope::single(product)))
}
