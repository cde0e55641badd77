// storefront/src/repository/seed.rs

//! The catalog the demo store opens with.

use crate::models::NewProduct;
use rust_decimal::Decimal;

fn product(name: &str, description: &str, details: &str, price_cents: i64, stock: u32) -> NewProduct {
  NewProduct {
    name: name.to_string(),
    price: Decimal::new(price_cents, 2),
    stock,
    description: description.to_string(),
    details: details.to_string(),
  }
}

/// Five products; in an empty repository they get ids 1 through 5 in this order.
pub fn demo_catalog() -> Vec<NewProduct> {
  vec![
    product("Echo Dot", "(2nd Generation) - Black", "", 9_250, 10),
    product(
      "Anker 3ft / 0.9m Nylon Braided Tangle-Free Micro USB Cable",
      "(Black)",
      "",
      999,
      20,
    ),
    product("JVC HAFX8R Headphone", "Riptidz, In-Ear", "", 6_999, 30),
    product("VTech CS6114 DECT 6.0", "Cordless Phone", "", 3_250, 40),
    product("NOKIA OEM BL-5J", "Cell Phone", "", 89_500, 50),
  ]
}
