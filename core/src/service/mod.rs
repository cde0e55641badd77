// storefront/src/service/mod.rs

//! Catalog operations that keep the active cart coherent with the repository.

pub mod product_service;

pub use product_service::ProductService;
