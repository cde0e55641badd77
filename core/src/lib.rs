// storefront/src/lib.rs

//! Storefront: the catalog and cart core of a small web shop.
//!
//!  - `Cart` accumulates (product, quantity) lines for one session and
//!    computes total and average value.
//!  - `ProductService` validates admin submissions, persists products through a
//!    `ProductRepository`, and removes deleted products from the active cart.
//!  - Validation messages come from an injected `MessageCatalog`.
//!
//! HTTP handling, rendering and authentication belong to the surrounding
//! application and are not part of this crate.

pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLine, SharedCart};
pub use crate::config::StorefrontConfig;
pub use crate::error::{ConfigError, RepositoryError, ServiceError, StorefrontResult};
pub use crate::models::{NewProduct, Product, ProductId, ProductSubmission};
pub use crate::repository::{InMemoryProductRepository, ProductRepository};
pub use crate::service::ProductService;
pub use crate::validation::{Culture, MessageCatalog, MessageKey, ProductValidator};

/*
    Typical wiring:
    1. Load a `StorefrontConfig` and build its `MessageCatalog`.
    2. Pick a `ProductRepository` (the in-memory one, seeded or empty).
    3. Give each session a `SharedCart`.
    4. Build a `ProductService` from the repository, that session's cart and a
       `ProductValidator`.
    5. Call `check_product_model_errors` before `save_product`; re-render the
       form with the returned messages when non-empty.
*/
