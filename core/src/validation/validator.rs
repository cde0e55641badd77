// storefront/src/validation/validator.rs
use crate::models::ProductSubmission;
use crate::validation::messages::{Culture, MessageCatalog, MessageKey};
use crate::validation::rules::FIELD_RULES;

/// Runs the field rules over a submission and resolves failures through the
/// injected message catalog.
#[derive(Debug, Clone)]
pub struct ProductValidator {
  catalog: MessageCatalog,
}

impl ProductValidator {
  pub fn new(catalog: MessageCatalog) -> Self {
    Self { catalog }
  }

  pub fn catalog(&self) -> &MessageCatalog {
    &self.catalog
  }

  /// Failing rule keys, ordered name, price, stock. At most one per field.
  pub fn validate_keys(&self, submission: &ProductSubmission) -> Vec<MessageKey> {
    FIELD_RULES.iter().filter_map(|rule| rule(submission)).collect()
  }

  /// Human-readable messages for every failing rule; empty when the submission is valid.
  pub fn validate(&self, submission: &ProductSubmission) -> Vec<String> {
    self
      .validate_keys(submission)
      .into_iter()
      .map(|key| self.catalog.lookup(key).to_string())
      .collect()
  }
}

impl Default for ProductValidator {
  fn default() -> Self {
    Self::new(MessageCatalog::for_culture(Culture::default()))
  }
}
