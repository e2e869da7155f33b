// Infrastructure layer module
// Contains storage adapters for the product catalog

pub mod repositories;
