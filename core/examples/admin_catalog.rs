// storefront/examples/admin_catalog.rs

use std::sync::Arc;
use storefront::{
  InMemoryProductRepository, ProductService, ProductSubmission, ProductValidator, SharedCart, StorefrontConfig,
};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
  // RUST_LOG overrides the default level.
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .init();

  info!("--- Admin Catalog Example ---");

  let config = StorefrontConfig::from_env()?;
  let repository = if config.seed_catalog {
    InMemoryProductRepository::seeded()
  } else {
    InMemoryProductRepository::new()
  };
  let validator = ProductValidator::new(config.message_catalog()?);
  let cart = SharedCart::default();
  let service = ProductService::new(Arc::new(repository), cart.clone(), validator);

  // 1. Submissions from the admin form: only the valid one is saved.
  let submissions = [
    ProductSubmission::new("", "-9", "ten"),
    ProductSubmission::new("Bluetooth Speaker", "", "4"),
    ProductSubmission::new("Bluetooth Speaker", "49.90", "12").description("Portable, waterproof"),
  ];

  let mut saved = Vec::new();
  for submission in &submissions {
    let errors = service.check_product_model_errors(submission);
    if errors.is_empty() {
      saved.push(service.save_product(submission)?);
    } else {
      for message in errors {
        warn!(name = %submission.name, %message, "Rejected submission");
      }
    }
  }

  // 2. A shopper puts the new product in their cart.
  for product in &saved {
    cart.write().add_item(Arc::clone(product), 2);
  }
  info!(lines = cart.read().len(), total = %cart.read().total_value(), "Shopper cart");

  // 3. The admin deletes it; the cart line goes with it.
  for product in &saved {
    service.delete_product(product.id)?;
  }
  info!(lines = cart.read().len(), total = %cart.read().total_value(), "Shopper cart after deletion");

  for form in service.get_all_products_as_submissions()? {
    info!(id = ?form.id, name = %form.name, price = %form.price, stock = %form.stock, "Catalog entry");
  }

  Ok(())
}
