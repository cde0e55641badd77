// storefront/examples/cart_session.rs

use std::sync::Arc;
use storefront::{InMemoryProductRepository, ProductRepository, RepositoryError, SharedCart};
use tracing::info;

fn main() -> Result<(), RepositoryError> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
    )
    .init();

  info!("--- Cart Session Example ---");

  let repository = InMemoryProductRepository::seeded();
  let products = repository.get_all_products()?;
  let cart = SharedCart::default();

  // 1. Fill the cart. The second Echo Dot add merges into the first line.
  {
    let mut guard = cart.write();
    guard.add_item(Arc::clone(&products[0]), 2);
    guard.add_item(Arc::clone(&products[2]), 1);
    guard.add_item(Arc::clone(&products[0]), 1);
  }

  // 2. Stock guard: the Nokia line already holds its full stock, so the increment is refused.
  {
    let mut guard = cart.write();
    let nokia = Arc::clone(&products[4]);
    let stock = nokia.stock;
    guard.add_item(Arc::clone(&nokia), stock);
    guard.add_item(nokia, 1);
  }

  let guard = cart.read();
  for line in guard.lines() {
    info!(
      product = %line.product.name,
      quantity = line.quantity,
      line_total = %line.line_total(),
      "Cart line"
    );
  }
  info!(total = %guard.total_value(), average = %guard.average_value(), units = guard.total_quantity(), "Cart summary");
  drop(guard);

  // 3. Remove a line and clear.
  cart.write().remove_line(&products[2]);
  info!(lines = cart.read().len(), "After removing the headphones");
  cart.write().clear();
  info!(empty = cart.read().is_empty(), "After clear");

  Ok(())
}
