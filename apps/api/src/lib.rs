//! Productos API Library
//!
//! This library provides the product catalog service: the product domain,
//! repository adapters, the HTTP controller, an HTTP client for the same
//! endpoints, and the server-rendered catalog page.

pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod web;
