// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use storefront::{
  NewProduct, Product, ProductId, ProductRepository, ProductService, ProductSubmission, ProductValidator,
  RepositoryError, SharedCart,
};
use tracing::Level;

// --- Product Fixtures ---
pub fn product(id: ProductId, name: &str, price_cents: i64, stock: u32) -> Arc<Product> {
  Arc::new(Product {
    id,
    name: name.to_string(),
    price: Decimal::new(price_cents, 2),
    stock,
    description: format!("{} description", name),
    details: String::new(),
  })
}

pub fn new_product(name: &str, price_cents: i64, stock: u32) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    price: Decimal::new(price_cents, 2),
    stock,
    description: format!("{} description", name),
    details: String::new(),
  }
}

/// The three products the service tests start from (ids 1, 2, 3).
pub fn fixture_products() -> Vec<NewProduct> {
  vec![
    new_product("Test Product 1", 599, 5),
    new_product("Test Product 2", 9_999, 15),
    new_product("Test Product 3", 15_999, 3),
  ]
}

pub fn valid_submission() -> ProductSubmission {
  ProductSubmission::new("Test Product", "5", "1")
    .description("Test description")
    .details("Product details")
}

// --- Failing Repository ---

/// Every call fails; counts how often it was asked.
#[derive(Debug, Default)]
pub struct UnavailableRepository {
  pub calls: AtomicUsize,
}

impl UnavailableRepository {
  fn fail<T>(&self) -> Result<T, RepositoryError> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Err(RepositoryError::Unavailable("connection refused".to_string()))
  }
}

impl ProductRepository for UnavailableRepository {
  fn get_all_products(&self) -> Result<Vec<Arc<Product>>, RepositoryError> {
    self.fail()
  }

  fn get_product(&self, _id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError> {
    self.fail()
  }

  fn save_product(&self, _product: NewProduct) -> Result<Arc<Product>, RepositoryError> {
    self.fail()
  }

  fn delete_product(&self, _id: ProductId) -> Result<bool, RepositoryError> {
    self.fail()
  }
}

// --- Service Construction ---
pub fn service_with(repository: Arc<dyn ProductRepository>) -> ProductService {
  ProductService::new(repository, SharedCart::default(), ProductValidator::default())
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
