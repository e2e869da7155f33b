pub mod pages;
pub mod products;
