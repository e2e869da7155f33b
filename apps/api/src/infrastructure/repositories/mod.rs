// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_product_repository;
pub mod postgres_product_repository;

pub use in_memory_product_repository::InMemoryProductRepository;
pub use postgres_product_repository::PostgresProductRepository;
