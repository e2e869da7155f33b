use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value_objects::Category;

/// Identifier of a product in the catalog
pub type ProductId = i64;

/// A catalog product
///
/// Serialized with camelCase field names (`hasPromo`) and the price as a JSON
/// number, which is the shape the form and the API client exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub has_promo: bool,
    pub category: Category,
}

/// Data for a product that does not exist yet
///
/// The repository assigns the id. An `id` sent by a client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub has_promo: bool,
    pub category: Category,
}

impl NewProduct {
    /// Attaches an id, producing the stored product
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            has_promo: self.has_promo,
            category: self.category,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            has_promo: product.has_promo,
            category: product.category,
        }
    }
}

/// Partial update of a product
///
/// Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_promo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl ProductPatch {
    /// Patch that only renames the product
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Applies the patch to a product in place
    ///
    /// # Example
    /// ```
    /// use productos_api::domain::product::{Category, Product, ProductPatch};
    /// use rust_decimal::Decimal;
    ///
    /// let mut product = Product {
    ///     id: 1,
    ///     name: "Producto test".to_string(),
    ///     description: "Descripción de prueba".to_string(),
    ///     price: Decimal::from(200),
    ///     has_promo: false,
    ///     category: Category::Mobile,
    /// };
    ///
    /// ProductPatch::rename("Actualizado").apply_to(&mut product);
    /// assert_eq!(product.name, "Actualizado");
    /// assert_eq!(product.price, Decimal::from(200));
    /// ```
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(has_promo) = self.has_promo {
            product.has_promo = has_promo;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
    }
}
