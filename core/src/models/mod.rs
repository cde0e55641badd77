// storefront/src/models/mod.rs

//! Catalog data: persisted products and the raw form submissions they are built from.

pub mod product;
pub mod submission;

pub use product::{NewProduct, Product, ProductId};
pub use submission::ProductSubmission;
