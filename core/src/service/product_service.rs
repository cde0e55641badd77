// storefront/src/service/product_service.rs

//! `ProductService` gates product creation behind field validation and makes
//! sure a product deleted from the catalog also leaves the active cart.

use crate::cart::SharedCart;
use crate::error::{RepositoryError, StorefrontResult};
use crate::models::{NewProduct, Product, ProductId, ProductSubmission};
use crate::repository::ProductRepository;
use crate::validation::ProductValidator;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub struct ProductService {
  repository: Arc<dyn ProductRepository>,
  cart: SharedCart,
  validator: ProductValidator,
}

impl ProductService {
  pub fn new(repository: Arc<dyn ProductRepository>, cart: SharedCart, validator: ProductValidator) -> Self {
    Self {
      repository,
      cart,
      validator,
    }
  }

  /// The cart this service keeps in step with the catalog.
  pub fn cart(&self) -> &SharedCart {
    &self.cart
  }

  /// Validates a submission field by field.
  ///
  /// # Returns
  /// One message per failing rule, ordered name, price, stock. Empty when the
  /// submission can be saved.
  #[instrument(name = "product_service::check_product_model_errors", skip_all)]
  pub fn check_product_model_errors(&self, submission: &ProductSubmission) -> Vec<String> {
    let messages = self.validator.validate(submission);
    if !messages.is_empty() {
      debug!(error_count = messages.len(), "Product submission failed validation.");
    }
    messages
  }

  /// Converts a submission and stores it, returning the product with its new id.
  ///
  /// The validation rules are not re-run here; call `check_product_model_errors`
  /// first. A submission whose price or stock cannot be parsed fails with
  /// `ServiceError::InvalidSubmission`.
  #[instrument(name = "product_service::save_product", skip_all, err(Display))]
  pub fn save_product(&self, submission: &ProductSubmission) -> StorefrontResult<Arc<Product>> {
    let new_product = NewProduct::try_from(submission).map_err(|e| {
      warn!(error = %e, "Product submission could not be converted.");
      e
    })?;

    let product = self.repository.save_product(new_product).map_err(|e| {
      error!(error = %e, "Repository failed to save product.");
      e
    })?;

    info!(product_id = product.id, name = %product.name, "Product saved.");
    Ok(product)
  }

  /// Deletes a product from the repository, then drops any cart line for it.
  ///
  /// If the repository call fails the cart is left alone and the error is returned.
  /// Deleting an unknown id changes nothing and is not an error.
  #[instrument(name = "product_service::delete_product", skip(self), err(Display))]
  pub fn delete_product(&self, id: ProductId) -> StorefrontResult<()> {
    let removed = self.repository.delete_product(id).map_err(|e| {
      error!(error = %e, "Repository failed to delete product; cart left unchanged.");
      e
    })?;

    let dropped_lines = self.cart.write().remove_line_by_id(id);

    if removed {
      info!(dropped_lines, "Product deleted.");
    } else {
      debug!(dropped_lines, "No product with this id; nothing deleted.");
    }
    Ok(())
  }

  pub fn get_product_by_id(&self, id: ProductId) -> StorefrontResult<Option<Arc<Product>>> {
    Ok(self.repository.get_product(id).map_err(log_read_failure)?)
  }

  pub fn get_all_products(&self) -> StorefrontResult<Vec<Arc<Product>>> {
    Ok(self.repository.get_all_products().map_err(log_read_failure)?)
  }

  /// A stored product in form-field shape, for re-displaying it in an edit form.
  pub fn get_product_submission_by_id(&self, id: ProductId) -> StorefrontResult<Option<ProductSubmission>> {
    Ok(
      self
        .get_product_by_id(id)?
        .map(|product| ProductSubmission::from(product.as_ref())),
    )
  }

  /// The whole catalog in form-field shape, in repository order.
  pub fn get_all_products_as_submissions(&self) -> StorefrontResult<Vec<ProductSubmission>> {
    Ok(
      self
        .get_all_products()?
        .iter()
        .map(|product| ProductSubmission::from(product.as_ref()))
        .collect(),
    )
  }
}

fn log_read_failure(e: RepositoryError) -> RepositoryError {
  error!(error = %e, "Repository read failed.");
  e
}
