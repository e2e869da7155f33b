// Product domain module
// Contains the product entity, its input shapes, and value objects

#![allow(clippy::module_inception)]

pub mod product;
pub mod value_objects;

// Re-export main types for convenience
pub use product::{NewProduct, Product, ProductId, ProductPatch};
pub use value_objects::Category;
