use std::sync::Arc;

use crate::domain::repositories::ProductRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}
