// tests/product_service_tests.rs
mod common;

use common::*;
use rust_decimal::Decimal;
use std::sync::atomic::Ordering;
use storefront::validation::rules::max_price;
use std::sync::Arc;
use storefront::{
  InMemoryProductRepository, MessageKey, ProductRepository, ProductSubmission, RepositoryError, ServiceError,
};

fn fixture_service() -> (Arc<InMemoryProductRepository>, storefront::ProductService) {
  let repository = Arc::new(InMemoryProductRepository::with_products(fixture_products()));
  let service = service_with(repository.clone());
  (repository, service)
}

#[test]
fn test_check_product_model_errors_uses_catalog_messages() {
  setup_tracing();
  let (_repository, service) = fixture_service();

  let mut missing_name = valid_submission();
  missing_name.name.clear();
  assert_eq!(
    service.check_product_model_errors(&missing_name),
    vec!["Please enter a name".to_string()]
  );

  let mut negative_price = valid_submission();
  negative_price.price = "-9".to_string();
  assert_eq!(
    service.check_product_model_errors(&negative_price),
    vec!["The price must be greater than zero".to_string()]
  );

  assert!(service.check_product_model_errors(&valid_submission()).is_empty());
}

#[test]
fn test_get_all_products() {
  let (_repository, service) = fixture_service();
  let products = service.get_all_products().expect("in-memory reads succeed");

  assert_eq!(products.len(), 3);
  let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_get_product_by_id() {
  let (_repository, service) = fixture_service();

  let product = service.get_product_by_id(1).unwrap().expect("product 1 exists");
  assert_eq!(product.id, 1);
  assert_eq!(product.name, "Test Product 1");

  assert!(service.get_product_by_id(99).unwrap().is_none());
}

#[test]
fn test_products_as_submissions() {
  let (_repository, service) = fixture_service();

  let form = service.get_product_submission_by_id(2).unwrap().expect("product 2 exists");
  assert_eq!(form.id, Some(2));
  assert_eq!(form.price, "99.99");
  assert_eq!(form.stock, "15");

  let forms = service.get_all_products_as_submissions().unwrap();
  assert_eq!(forms.len(), 3);
  assert!(forms.iter().all(|f| service.check_product_model_errors(f).is_empty()));

  assert!(service.get_product_submission_by_id(99).unwrap().is_none());
}

#[test]
fn test_save_product_assigns_id_and_parses_fields() {
  setup_tracing();
  let (repository, service) = fixture_service();

  let submission = ProductSubmission::new("New product", "12.99", "999").description("New Product from form");
  assert!(service.check_product_model_errors(&submission).is_empty());

  let saved = service.save_product(&submission).expect("save succeeds");
  assert_eq!(saved.id, 4);
  assert_eq!(saved.price, Decimal::new(1_299, 2));
  assert_eq!(saved.stock, 999);
  assert_eq!(saved.description, "New Product from form");

  let stored = repository.get_product(4).unwrap().expect("stored");
  assert_eq!(stored.name, "New product");
  assert_eq!(service.get_all_products().unwrap().len(), 4);
}

#[test]
fn test_save_product_rejects_unconvertible_submission() {
  let (repository, service) = fixture_service();

  let bad_price = ProductSubmission::new("Broken", "Hello World", "1");
  match service.save_product(&bad_price) {
    Err(ServiceError::InvalidSubmission { field, .. }) => assert_eq!(field, "price"),
    other => panic!("Expected InvalidSubmission for price, got {:?}", other),
  }

  let negative_stock = ProductSubmission::new("Broken", "5", "-1");
  match service.save_product(&negative_stock) {
    Err(ServiceError::InvalidSubmission { field, value }) => {
      assert_eq!(field, "stock");
      assert_eq!(value, "-1");
    }
    other => panic!("Expected InvalidSubmission for stock, got {:?}", other),
  }

  assert_eq!(repository.len(), 3);
}

#[test]
fn test_delete_product_removes_it_from_store_and_cart() {
  setup_tracing();
  let (repository, service) = fixture_service();

  let saved = service
    .save_product(&ProductSubmission::new("Test Product 2", "5.99", "10"))
    .unwrap();
  let keep = service.get_product_by_id(1).unwrap().unwrap();

  {
    let mut cart = service.cart().write();
    cart.add_item(Arc::clone(&saved), 3);
    cart.add_item(keep, 1);
  }
  assert_eq!(service.cart().read().len(), 2);

  service.delete_product(saved.id).expect("delete succeeds");

  assert!(service.get_product_by_id(saved.id).unwrap().is_none());
  assert!(repository.get_product(saved.id).unwrap().is_none());
  let cart = service.cart().read();
  assert_eq!(cart.len(), 1);
  assert!(cart.line_for(saved.id).is_none());
  assert!(cart.line_for(1).is_some());
}

#[test]
fn test_delete_absent_product_changes_nothing() {
  let (repository, service) = fixture_service();
  service.cart().write().add_item(service.get_product_by_id(3).unwrap().unwrap(), 2);

  service.delete_product(99).expect("absent id is not an error");

  assert_eq!(repository.len(), 3);
  assert_eq!(service.cart().read().len(), 1);
  assert_eq!(service.cart().read().total_quantity(), 2);
}

#[test]
fn test_deletion_reaches_the_session_cart_handle() {
  let (_repository, service) = fixture_service();
  let session = service.cart().clone();
  session.write().add_item(service.get_product_by_id(2).unwrap().unwrap(), 1);

  service.delete_product(2).unwrap();
  assert!(session.read().is_empty());
}

#[test]
fn test_repository_failure_propagates_and_leaves_cart_alone() {
  setup_tracing();
  let repository = Arc::new(UnavailableRepository::default());
  let service = service_with(repository.clone());
  service.cart().write().add_item(product(1, "Test Product 1", 599, 5), 2);

  let err = service.delete_product(1).unwrap_err();
  assert!(matches!(err, ServiceError::Repository(RepositoryError::Unavailable(_))));
  assert_eq!(service.cart().read().len(), 1);

  assert!(service.get_all_products().is_err());
  assert!(service.get_product_by_id(1).is_err());
  assert!(service.save_product(&valid_submission()).is_err());
  assert_eq!(repository.calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_validation_does_not_touch_repository() {
  let repository = Arc::new(UnavailableRepository::default());
  let service = service_with(repository.clone());

  let keys = storefront::ProductValidator::default().validate_keys(&ProductSubmission::default());
  assert_eq!(keys.len(), 3);
  assert_eq!(service.check_product_model_errors(&ProductSubmission::default()).len(), 3);
  assert!(keys.contains(&MessageKey::MissingStock));
  assert_eq!(repository.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_backend_errors_wrap_anyhow() {
  let err: RepositoryError = anyhow::anyhow!("disk full").into();
  let service_err = ServiceError::from(err);
  assert!(service_err.to_string().contains("disk full"));
}

#[test]
fn test_huge_validated_price_is_capped_and_totals_stay_finite() {
  setup_tracing();
  let repository = Arc::new(InMemoryProductRepository::new());
  let service = service_with(repository);

  let submission = ProductSubmission::new("Huge", "79228162514264337593543950335", "5");
  assert!(service.check_product_model_errors(&submission).is_empty());

  let saved = service.save_product(&submission).expect("save succeeds");
  assert_eq!(saved.price, max_price());

  let cart = service.cart();
  cart.write().add_item(saved, 2);
  assert_eq!(cart.read().total_value(), max_price() * Decimal::from(2));
  assert_eq!(cart.read().average_value(), max_price());
}

#[test]
fn test_end_to_end_cart_totals() {
  let repository = Arc::new(InMemoryProductRepository::new());
  let service = service_with(repository);

  let a = service.save_product(&ProductSubmission::new("A", "10.99", "5")).unwrap();
  let b = service.save_product(&ProductSubmission::new("B", "20.99", "5")).unwrap();

  let cart = service.cart();
  cart.write().add_item(a, 4);
  cart.write().add_item(b, 1);

  assert_eq!(cart.read().total_value(), Decimal::new(6_495, 2));
  assert_eq!(cart.read().average_value(), Decimal::new(1_299, 2));
}
