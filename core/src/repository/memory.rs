// storefront/src/repository/memory.rs
use crate::error::RepositoryError;
use crate::models::{NewProduct, Product, ProductId};
use crate::repository::{seed, ProductRepository};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
struct Store {
  products: BTreeMap<ProductId, Arc<Product>>,
  next_id: ProductId,
}

/// Map-backed repository for tests and demos. Ids start at 1 and are never
/// reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryProductRepository {
  store: RwLock<Store>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self {
      store: RwLock::new(Store {
        products: BTreeMap::new(),
        next_id: 1,
      }),
    }
  }

  /// A repository pre-filled with `products`, ids assigned in order.
  pub fn with_products(products: impl IntoIterator<Item = NewProduct>) -> Self {
    let repository = Self::new();
    {
      let mut store = repository.store.write();
      for product in products {
        Self::insert(&mut store, product);
      }
    }
    repository
  }

  /// A repository holding the demo catalog.
  pub fn seeded() -> Self {
    let repository = Self::with_products(seed::demo_catalog());
    info!(count = repository.len(), "Seeded in-memory catalog.");
    repository
  }

  pub fn len(&self) -> usize {
    self.store.read().products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.store.read().products.is_empty()
  }

  fn insert(store: &mut Store, product: NewProduct) -> Arc<Product> {
    let id = store.next_id;
    store.next_id += 1;
    let stored = Arc::new(product.with_id(id));
    store.products.insert(id, Arc::clone(&stored));
    stored
  }
}

impl Default for InMemoryProductRepository {
  fn default() -> Self {
    Self::new()
  }
}

impl ProductRepository for InMemoryProductRepository {
  fn get_all_products(&self) -> Result<Vec<Arc<Product>>, RepositoryError> {
    Ok(self.store.read().products.values().cloned().collect())
  }

  fn get_product(&self, id: ProductId) -> Result<Option<Arc<Product>>, RepositoryError> {
    Ok(self.store.read().products.get(&id).cloned())
  }

  fn save_product(&self, product: NewProduct) -> Result<Arc<Product>, RepositoryError> {
    let mut store = self.store.write();
    if store.next_id == ProductId::MAX {
      return Err(RepositoryError::Unavailable("product id space exhausted".to_string()));
    }
    let stored = Self::insert(&mut store, product);
    debug!(product_id = stored.id, "Stored product in memory.");
    Ok(stored)
  }

  fn delete_product(&self, id: ProductId) -> Result<bool, RepositoryError> {
    Ok(self.store.write().products.remove(&id).is_some())
  }
}
