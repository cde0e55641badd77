// storefront/src/cart/shared.rs
use crate::cart::lines::Cart;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// The session's active cart, shared between the request layer and
/// `ProductService` so that catalog deletions reach the cart.
///
/// Guards are blocking; take them for the duration of one cart operation and drop them.
#[derive(Debug, Default)]
pub struct SharedCart(Arc<RwLock<Cart>>);

impl SharedCart {
  pub fn new(cart: Cart) -> Self {
    SharedCart(Arc::new(RwLock::new(cart)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.write()
  }

  /// Attempts to acquire a read lock without blocking.
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, Cart>> {
    self.0.try_read()
  }

  /// Attempts to acquire a write lock without blocking.
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, Cart>> {
    self.0.try_write()
  }

  /// True when both handles point at the same cart.
  pub fn same_cart(&self, other: &SharedCart) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Clone for SharedCart {
  fn clone(&self) -> Self {
    SharedCart(Arc::clone(&self.0))
  }
}
