// storefront/src/error.rs
use anyhow::Error as AnyhowError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a `ProductRepository` backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Product store unavailable: {0}")]
  Unavailable(String),

  #[error("Product store backend error. Source: {source}")]
  Backend {
    #[from]
    source: AnyhowError,
  },
}

#[derive(Debug, Error)]
pub enum ServiceError {
  /// The submission could not be converted into a product. Callers are expected
  /// to run `check_product_model_errors` first, so this only surfaces when they don't.
  #[error("Submission field '{field}' cannot be converted: '{value}'")]
  InvalidSubmission { field: &'static str, value: String },

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid value for '{var}': {message}")]
  InvalidValue { var: &'static str, message: String },

  #[error("Cannot read message overrides from {path:?}. Source: {source}")]
  MessagesFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Message overrides are not a JSON object of strings: {0}")]
  MessagesFormat(#[from] serde_json::Error),

  #[error("Unknown message key in overrides: {0}")]
  UnknownMessageKey(String),
}

pub type StorefrontResult<T, E = ServiceError> = std::result::Result<T, E>;
