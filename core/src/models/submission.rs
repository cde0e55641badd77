// storefront/src/models/submission.rs

use crate::error::ServiceError;
use crate::models::product::{NewProduct, Product, ProductId};
use crate::validation::rules::{parse_price, parse_stock};
use serde::{Deserialize, Serialize};

/// Product fields exactly as entered in the admin form. Nothing here is trusted
/// until `ProductValidator` has looked at it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSubmission {
  #[serde(default)]
  pub id: Option<ProductId>,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub price: String,
  #[serde(default)]
  pub stock: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub details: String,
}

impl ProductSubmission {
  pub fn new(name: impl Into<String>, price: impl Into<String>, stock: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      price: price.into(),
      stock: stock.into(),
      ..Default::default()
    }
  }

  pub fn description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn details(mut self, details: impl Into<String>) -> Self {
    self.details = details.into();
    self
  }
}

/// Renders a stored product back into form fields, e.g. to re-display an edit page.
impl From<&Product> for ProductSubmission {
  fn from(product: &Product) -> Self {
    Self {
      id: Some(product.id),
      name: product.name.clone(),
      price: product.price.to_string(),
      stock: product.stock.to_string(),
      description: product.description.clone(),
      details: product.details.clone(),
    }
  }
}

/// Parses the numeric fields. The validation rules are not re-applied: a
/// negative price still converts, a negative stock does not fit `u32` and fails.
impl TryFrom<&ProductSubmission> for NewProduct {
  type Error = ServiceError;

  fn try_from(submission: &ProductSubmission) -> Result<Self, Self::Error> {
    let price = parse_price(&submission.price).ok_or_else(|| ServiceError::InvalidSubmission {
      field: "price",
      value: submission.price.clone(),
    })?;

    let stock = parse_stock(&submission.stock)
      .and_then(|stock| u32::try_from(stock).ok())
      .ok_or_else(|| ServiceError::InvalidSubmission {
        field: "stock",
        value: submission.stock.clone(),
      })?;

    Ok(NewProduct {
      name: submission.name.clone(),
      price,
      stock,
      description: submission.description.clone(),
      details: submission.details.clone(),
    })
  }
}
