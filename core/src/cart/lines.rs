// storefront/src/cart/lines.rs

//! The session cart: an ordered set of (product, quantity) lines with aggregate queries.

use crate::models::{Product, ProductId};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// One product held in the cart. The product is shared with the catalog, not
/// copied, so a cart never outlives the catalog's view of that product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
  pub product: Arc<Product>,
  pub quantity: u32,
}

impl CartLine {
  /// `quantity × price` for this line, saturating at `Decimal::MAX` / `Decimal::MIN`.
  pub fn line_total(&self) -> Decimal {
    self.product.price.saturating_mul(Decimal::from(self.quantity))
  }
}

/// Lines are keyed by product id: at most one line per product. Insertion order
/// is kept for display only.
///
/// No operation here fails. Quantities are assumed to have been checked by the caller.
#[derive(Debug, Clone, Default)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `quantity` units of `product`.
  ///
  /// A product not yet in the cart always gets a new line. For a product that
  /// already has a line, the quantity is merged only while the product's stock
  /// is strictly greater than the line's *current* quantity; otherwise the call
  /// does nothing. The guard looks at the quantity before the increment, so a
  /// merge can carry the line past the stock level.
  pub fn add_item(&mut self, product: Arc<Product>, quantity: u32) {
    match self.lines.iter_mut().find(|line| line.product.id == product.id) {
      None => {
        debug!(product_id = product.id, quantity, "Adding new cart line.");
        self.lines.push(CartLine { product, quantity });
      }
      Some(line) if product.stock > line.quantity => {
        line.quantity = line.quantity.saturating_add(quantity);
        debug!(product_id = product.id, line_quantity = line.quantity, "Merged quantity into cart line.");
      }
      Some(line) => {
        debug!(
          product_id = product.id,
          stock = product.stock,
          line_quantity = line.quantity,
          "Stock guard refused cart increment."
        );
      }
    }
  }

  /// Removes every line for `product`. Absent products are ignored.
  pub fn remove_line(&mut self, product: &Product) {
    self.remove_line_by_id(product.id);
  }

  /// Id-keyed form of `remove_line`. Returns the number of lines dropped.
  pub fn remove_line_by_id(&mut self, product_id: ProductId) -> usize {
    let before = self.lines.len();
    self.lines.retain(|line| line.product.id != product_id);
    before - self.lines.len()
  }

  /// Sum of `quantity × price` over all lines; zero for an empty cart.
  /// Saturates rather than overflowing.
  pub fn total_value(&self) -> Decimal {
    self
      .lines
      .iter()
      .fold(Decimal::ZERO, |total, line| total.saturating_add(line.line_total()))
  }

  /// Total value divided by the number of units in the cart; zero for an empty cart.
  /// The divisor is at least one, so this cannot overflow.
  pub fn average_value(&self) -> Decimal {
    let units = self.total_quantity();
    if self.lines.is_empty() || units == 0 {
      return Decimal::ZERO;
    }
    self.total_value() / Decimal::from(units)
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line_for(&self, product_id: ProductId) -> Option<&CartLine> {
    self.lines.iter().find(|line| line.product.id == product_id)
  }

  /// Number of units across all lines.
  pub fn total_quantity(&self) -> u64 {
    self.lines.iter().map(|line| u64::from(line.quantity)).sum()
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}
