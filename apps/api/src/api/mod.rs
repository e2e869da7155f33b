// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod envelope;
pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::{pages, products};
pub use state::AppState;

/// Base path of the product endpoints
pub const PRODUCTS_PATH: &str = "/products";

/// Builds the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(pages::health_check))
        // Pages
        .route("/", get(pages::index))
        .route("/products/add", post(pages::submit_form))
        // Product routes
        .route(PRODUCTS_PATH, get(products::get_all).post(products::create))
        .route(
            "/products/:id",
            get(products::get_by_id)
                .put(products::update)
                .delete(products::delete),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
