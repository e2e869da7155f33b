use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::product::{Category, NewProduct, Product, ProductId, ProductPatch};
use crate::domain::repositories::{ProductRepository, RepositoryError};

const PRODUCT_COLUMNS: &str = "id, name, description, price, has_promo, category";

/// Row shape of the `products` table
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    has_promo: bool,
    category: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse::<Category>()
            .map_err(|e| RepositoryError::Storage(format!("Invalid category from database: {}", e)))?;

        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            has_promo: row.has_promo,
            category,
        })
    }
}

/// PostgreSQL implementation of ProductRepository
///
/// Queries are checked at runtime, so building the crate does not need a
/// live database. Every mutation uses `RETURNING` to hand back the affected row.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new PostgresProductRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `products` table when it does not exist yet
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price NUMERIC NOT NULL,
                has_promo BOOLEAN NOT NULL DEFAULT FALSE,
                category TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to migrate products: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn read(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to read products: {}", e)))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn read_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM products WHERE id = $1",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to find product by id: {}", e)))?;

        row.ok_or(RepositoryError::NotFound(id))?.try_into()
    }

    async fn create(&self, data: NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (name, description, price, has_promo, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.has_promo)
        .bind(data.category.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to create product: {}", e)))?;

        row.try_into()
    }

    async fn update(&self, id: ProductId, data: ProductPatch) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                has_promo = COALESCE($5, has_promo),
                category = COALESCE($6, category)
            WHERE id = $1
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(data.name)
        .bind(data.description)
        .bind(data.price)
        .bind(data.has_promo)
        .bind(data.category.map(|c| c.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to update product: {}", e)))?;

        row.ok_or(RepositoryError::NotFound(id))?.try_into()
    }

    async fn delete(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "DELETE FROM products WHERE id = $1 RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(format!("Failed to delete product: {}", e)))?;

        row.ok_or(RepositoryError::NotFound(id))?.try_into()
    }
}
