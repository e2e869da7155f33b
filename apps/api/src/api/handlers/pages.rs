use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::product::NewProduct;
use crate::web::{catalog_page, FormAdd, FormFields};

/// Render the catalog page
///
/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let products = state.products.read().await?;

    Ok(Html(catalog_page(&products).to_html()))
}

/// Accept the add form and store the submitted product
///
/// POST /products/add
pub async fn submit_form(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Result<Redirect, ApiError> {
    let products = state.products.read().await?;
    let product = FormAdd::new(&products)
        .submit(fields)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let created = state.products.create(NewProduct::from(product)).await?;
    tracing::info!(id = created.id, name = %created.name, "Created product from form");

    Ok(Redirect::to("/"))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
