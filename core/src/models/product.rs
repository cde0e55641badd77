// storefront/src/models/product.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identity assigned by the repository when a product is first saved.
pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: Decimal,
  /// Units available for sale.
  pub stock: u32,
  pub description: String,
  pub details: String,
}

/// A product that has not been persisted yet and so has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
  pub name: String,
  pub price: Decimal,
  pub stock: u32,
  pub description: String,
  pub details: String,
}

impl NewProduct {
  /// Attaches the id handed out by a repository.
  pub fn with_id(self, id: ProductId) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      stock: self.stock,
      description: self.description,
      details: self.details,
    }
  }
}
