pub mod lines;
pub mod shared;

// Re-export so callers can write `storefront::cart::Cart`.
pub use lines::{Cart, CartLine};
pub use shared::SharedCart;
