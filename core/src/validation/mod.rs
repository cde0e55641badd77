// storefront/src/validation/mod.rs

//! Field-level validation of product submissions.

pub mod messages;
pub mod rules;
pub mod validator;

pub use messages::{Culture, MessageCatalog, MessageKey};
pub use validator::ProductValidator;
