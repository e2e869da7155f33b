// Repository ports (interfaces implemented by infrastructure adapters)

pub mod product_repository;

pub use product_repository::{ProductRepository, RepositoryError};
