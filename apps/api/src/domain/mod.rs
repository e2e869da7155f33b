// Domain layer module exports
// Product catalog types and the repository port
// Domain is independent of infrastructure concerns

pub mod product;
pub mod repositories;
