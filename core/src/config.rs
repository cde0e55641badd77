// storefront/src/config.rs

use crate::error::ConfigError;
use crate::validation::{Culture, MessageCatalog};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
  /// Language of the built-in validation messages.
  pub culture: Culture,
  /// Optional JSON file whose entries replace individual messages.
  pub messages_path: Option<PathBuf>,
  /// Fill the in-memory repository with the demo catalog on startup.
  pub seed_catalog: bool,
}

impl Default for StorefrontConfig {
  fn default() -> Self {
    Self {
      culture: Culture::En,
      messages_path: None,
      seed_catalog: true,
    }
  }
}

impl StorefrontConfig {
  /// Reads the process environment after loading a `.env` file if present.
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenv().ok();
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the configuration from any variable source. Unset or blank
  /// variables fall back to their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_var = |var_name: &str| lookup(var_name).filter(|value| !value.trim().is_empty());
    let defaults = Self::default();

    let culture = match get_var("STOREFRONT_CULTURE") {
      Some(value) => value.parse::<Culture>()?,
      None => defaults.culture,
    };

    let messages_path = get_var("STOREFRONT_MESSAGES_PATH").map(PathBuf::from);

    let seed_catalog = match get_var("STOREFRONT_SEED_CATALOG") {
      Some(value) => value
        .trim()
        .parse::<bool>()
        .map_err(|e| ConfigError::InvalidValue {
          var: "STOREFRONT_SEED_CATALOG",
          message: format!("'{}': {}", value, e),
        })?,
      None => defaults.seed_catalog,
    };

    tracing::info!(?culture, seed_catalog, "Storefront configuration loaded.");

    Ok(Self {
      culture,
      messages_path,
      seed_catalog,
    })
  }

  /// The culture's built-in catalog with the overrides file, if any, applied on top.
  pub fn message_catalog(&self) -> Result<MessageCatalog, ConfigError> {
    let catalog = MessageCatalog::for_culture(self.culture);
    match &self.messages_path {
      Some(path) => catalog.with_overrides_file(path),
      None => Ok(catalog),
    }
  }
}
