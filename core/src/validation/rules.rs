// storefront/src/validation/rules.rs

//! One pure function per submission field. Each returns the first rule its
//! field breaks, or `None`; rules within a field short-circuit, fields don't.

use crate::models::ProductSubmission;
use crate::validation::messages::MessageKey;
use rust_decimal::Decimal;

/// A field check over the whole submission.
pub type FieldRule = fn(&ProductSubmission) -> Option<MessageKey>;

/// Field checks in reporting order: name, price, stock.
pub const FIELD_RULES: [FieldRule; 3] = [name_rule, price_rule, stock_rule];

fn name_rule(submission: &ProductSubmission) -> Option<MessageKey> {
  check_name(&submission.name)
}

fn price_rule(submission: &ProductSubmission) -> Option<MessageKey> {
  check_price(&submission.price)
}

fn stock_rule(submission: &ProductSubmission) -> Option<MessageKey> {
  check_stock(&submission.stock)
}

fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

/// Prices are kept to the cent.
pub const PRICE_SCALE: u32 = 2;

/// Whole currency units a price may reach. Larger inputs saturate here, so any
/// stored price times a `u32` quantity stays far inside `Decimal`'s range.
pub const MAX_PRICE_UNITS: i64 = 1_000_000_000_000;

pub fn max_price() -> Decimal {
  Decimal::from(MAX_PRICE_UNITS)
}

/// Plain (`12.99`) or scientific (`1.5e2`) notation, surrounding whitespace ignored.
///
/// Only ASCII digits, one optional sign, one optional `.` and an optional
/// `e`/`E` exponent are accepted; digit separators (`_`, `,`) are not numbers.
/// The value is rounded half away from zero to `PRICE_SCALE` places, so
/// magnitudes below half a cent come out as zero. Magnitudes above
/// `max_price()` saturate to it.
pub fn parse_price(value: &str) -> Option<Decimal> {
  let trimmed = value.trim();
  let (mantissa, exponent) = match trimmed.find(['e', 'E']) {
    Some(at) => (&trimmed[..at], parse_exponent(&trimmed[at + 1..])?),
    None => (trimmed, 0),
  };
  let (negative, unsigned) = match mantissa.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
  };
  let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
  if int_part.is_empty() && frac_part.is_empty() {
    return None;
  }
  if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
    return None;
  }

  // value = 0.d1 d2 d3 ... × 10^point
  let mut point = (int_part.len() as i64).saturating_add(exponent);
  let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).map(|b| b - b'0').collect();
  let leading_zeros = digits.iter().take_while(|&&d| d == 0).count();
  digits.drain(..leading_zeros);
  point = point.saturating_sub(leading_zeros as i64);

  let limit = max_price();
  if digits.is_empty() {
    return Some(Decimal::ZERO);
  }
  // 10^(point - 1) is the leading digit's magnitude; past 10^13 the cap applies anyway.
  if point > 13 {
    return Some(if negative { -limit } else { limit });
  }

  let digit_at = |i: i64| -> i64 {
    usize::try_from(i)
      .ok()
      .and_then(|i| digits.get(i))
      .map_or(0, |&d| i64::from(d))
  };
  let cents_len = point + i64::from(PRICE_SCALE);
  let mut cents: i64 = (0..cents_len.max(0)).fold(0, |acc, i| acc * 10 + digit_at(i));
  if cents_len >= 0 && digit_at(cents_len) >= 5 {
    cents += 1;
  }
  if negative {
    cents = -cents;
  }

  let price = Decimal::new(cents, PRICE_SCALE);
  Some(price.clamp(-limit, limit))
}

/// Signed decimal exponent. Values past `i64` saturate instead of failing, so
/// `1e99999999999999999999` still lands on the price cap.
fn parse_exponent(value: &str) -> Option<i64> {
  let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  Some(value.parse::<i64>().unwrap_or(if value.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// Optional sign and digits fitting an `i32`, surrounding whitespace ignored.
pub fn parse_stock(value: &str) -> Option<i32> {
  value.trim().parse::<i32>().ok()
}

pub fn check_name(name: &str) -> Option<MessageKey> {
  is_blank(name).then_some(MessageKey::MissingName)
}

pub fn check_price(price: &str) -> Option<MessageKey> {
  if is_blank(price) {
    return Some(MessageKey::MissingPrice);
  }
  match parse_price(price) {
    None => Some(MessageKey::PriceNotANumber),
    Some(value) if value <= Decimal::ZERO => Some(MessageKey::PriceNotGreaterThanZero),
    Some(_) => None,
  }
}

pub fn check_stock(stock: &str) -> Option<MessageKey> {
  if is_blank(stock) {
    return Some(MessageKey::MissingStock);
  }
  match parse_stock(stock) {
    None => Some(MessageKey::StockNotAnInteger),
    Some(value) if value <= 0 => Some(MessageKey::StockNotGreaterThanZero),
    Some(_) => None,
  }
}
