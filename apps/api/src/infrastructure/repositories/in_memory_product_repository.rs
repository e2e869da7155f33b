use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::{NewProduct, Product, ProductId, ProductPatch};
use crate::domain::repositories::{ProductRepository, RepositoryError};

/// In-memory implementation of ProductRepository
///
/// Used when no database is configured and by tests. Ids are assigned as
/// one past the highest id currently stored.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<BTreeMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given products
    ///
    /// A later product with a duplicate id replaces the earlier one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: RwLock::new(products),
        }
    }

    fn next_id(products: &BTreeMap<ProductId, Product>) -> Result<ProductId, RepositoryError> {
        match products.keys().next_back() {
            Some(id) => id
                .checked_add(1)
                .ok_or_else(|| RepositoryError::Storage("Product id space exhausted".to_string())),
            None => Ok(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn read(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn read_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let products = self.products.read().await;
        products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn create(&self, data: NewProduct) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = data.with_id(Self::next_id(&products)?);
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, data: ProductPatch) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        let product = products.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        data.apply_to(product);
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;
        products.remove(&id).ok_or(RepositoryError::NotFound(id))
    }
}
