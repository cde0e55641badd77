// storefront/src/repository/mod.rs

//! The persistence seam for the catalog. The core only ever talks to
//! `ProductRepository`; storage technology lives behind it.

pub mod memory;
pub mod seed;

use crate::error::RepositoryError;
use crate::models::{NewProduct, Product, ProductId};
use std::sync::Arc;

pub use memory::InMemoryProductRepository;

/// Product storage. Implementations serialize their own writes.
///
/// A missing id is never an error: reads return `None`, deletes return `false`.
pub trait ProductRepository: Send + Sync {
  fn get_all_products(&self) -> Result<Vec<Arc<Product>>, RepositoryError>;

  fn get_product(&self, id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError>;

  /// Assigns an id and stores the product.
  fn save_product(&self, product: NewProduct) -> Result<Arc<Product>, RepositoryError>;

  /// Returns whether a product was removed.
  fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError>;
}
