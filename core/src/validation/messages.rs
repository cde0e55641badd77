// storefront/src/validation/messages.rs

//! Message keys for the product validation rules and the key → text lookup
//! injected into `ProductValidator`.

use crate::error::ConfigError;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The fixed set of rule names a message catalog must be able to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
  MissingName,
  MissingPrice,
  PriceNotANumber,
  PriceNotGreaterThanZero,
  MissingStock,
  StockNotAnInteger,
  StockNotGreaterThanZero,
}

impl MessageKey {
  pub const ALL: [MessageKey; 7] = [
    MessageKey::MissingName,
    MessageKey::MissingPrice,
    MessageKey::PriceNotANumber,
    MessageKey::PriceNotGreaterThanZero,
    MessageKey::MissingStock,
    MessageKey::StockNotAnInteger,
    MessageKey::StockNotGreaterThanZero,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      MessageKey::MissingName => "MissingName",
      MessageKey::MissingPrice => "MissingPrice",
      MessageKey::PriceNotANumber => "PriceNotANumber",
      MessageKey::PriceNotGreaterThanZero => "PriceNotGreaterThanZero",
      MessageKey::MissingStock => "MissingStock",
      MessageKey::StockNotAnInteger => "StockNotAnInteger",
      MessageKey::StockNotGreaterThanZero => "StockNotGreaterThanZero",
    }
  }
}

impl fmt::Display for MessageKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for MessageKey {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    MessageKey::ALL
      .into_iter()
      .find(|key| key.as_str() == s)
      .ok_or_else(|| ConfigError::UnknownMessageKey(s.to_string()))
  }
}

/// Languages with a built-in message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Culture {
  #[default]
  En,
  Fr,
}

impl FromStr for Culture {
  type Err = ConfigError;

  /// Accepts a bare language (`fr`) or a language tag (`fr-FR`, `en_GB`).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let language = s.trim().split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    match language.as_str() {
      "en" => Ok(Culture::En),
      "fr" => Ok(Culture::Fr),
      _ => Err(ConfigError::InvalidValue {
        var: "STOREFRONT_CULTURE",
        message: format!("unsupported culture '{}'", s),
      }),
    }
  }
}

/// Key → message mapping. A key with no entry resolves to its own name, so a
/// partial catalog still produces something readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
  messages: HashMap<MessageKey, String>,
}

impl MessageCatalog {
  pub fn new(messages: HashMap<MessageKey, String>) -> Self {
    Self { messages }
  }

  pub fn for_culture(culture: Culture) -> Self {
    let entries: [(MessageKey, &str); 7] = match culture {
      Culture::En => [
        (MessageKey::MissingName, "Please enter a name"),
        (MessageKey::MissingPrice, "Please enter a price"),
        (MessageKey::PriceNotANumber, "The value entered for the price must be a number"),
        (MessageKey::PriceNotGreaterThanZero, "The price must be greater than zero"),
        (MessageKey::MissingStock, "Please enter a stock value"),
        (MessageKey::StockNotAnInteger, "The value entered for the stock must be an integer"),
        (MessageKey::StockNotGreaterThanZero, "The stock must be greater than zero"),
      ],
      Culture::Fr => [
        (MessageKey::MissingName, "Veuillez saisir un nom"),
        (MessageKey::MissingPrice, "Veuillez saisir un prix"),
        (MessageKey::PriceNotANumber, "La valeur saisie pour le prix doit être un nombre"),
        (MessageKey::PriceNotGreaterThanZero, "Le prix doit être supérieur à zéro"),
        (MessageKey::MissingStock, "Veuillez saisir une valeur pour le stock"),
        (MessageKey::StockNotAnInteger, "La valeur saisie pour le stock doit être un entier"),
        (MessageKey::StockNotGreaterThanZero, "Le stock doit être supérieur à zéro"),
      ],
    };
    Self::new(entries.into_iter().map(|(key, text)| (key, text.to_string())).collect())
  }

  pub fn lookup(&self, key: MessageKey) -> &str {
    self.messages.get(&key).map(String::as_str).unwrap_or(key.as_str())
  }

  pub fn insert(&mut self, key: MessageKey, message: impl Into<String>) {
    self.messages.insert(key, message.into());
  }

  /// Merges a JSON object of `{"KeyName": "message"}` pairs over this catalog.
  pub fn with_overrides_json(mut self, json: &str) -> Result<Self, ConfigError> {
    let raw: HashMap<String, String> = serde_json::from_str(json)?;
    for (name, message) in raw {
      let key = name.parse::<MessageKey>()?;
      self.messages.insert(key, message);
    }
    Ok(self)
  }

  pub fn with_overrides_file(self, path: &Path) -> Result<Self, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::MessagesFile {
      path: path.to_path_buf(),
      source,
    })?;
    self.with_overrides_json(&json)
  }
}
