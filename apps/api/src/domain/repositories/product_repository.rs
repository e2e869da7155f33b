use async_trait::async_trait;
use thiserror::Error;

use crate::domain::product::{NewProduct, Product, ProductId, ProductPatch};

/// Failure reported by a product repository
///
/// Handlers forward these unchanged; the message is what callers see.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("{0}")]
    Storage(String),
}

/// Repository trait for the product catalog
///
/// Defines the contract for persisting and retrieving products.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List every product, ordered by id
    async fn read(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Find a product by its id, failing with `NotFound` when absent
    async fn read_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;

    /// Store a new product and return it with its assigned id
    async fn create(&self, data: NewProduct) -> Result<Product, RepositoryError>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: ProductId, data: ProductPatch) -> Result<Product, RepositoryError>;

    /// Remove a product and return what was removed
    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError>;
}
