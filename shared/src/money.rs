//! Money calculation helpers using rust_decimal for precision
//!
//! Prices cross the model boundary as `f64` (matching the wire format)
//! but every aggregation goes through `Decimal` so repeated addition
//! cannot drift. Results are rounded to 2 decimal places, half-up.

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Round a decimal amount to cents
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// price × quantity for a single line, rounded to cents
pub fn line_total(price: f64, quantity: i32) -> f64 {
    let total = to_decimal(price) * Decimal::from(quantity);
    round(total).to_f64().unwrap_or(0.0)
}

/// Sum of price × quantity over (price, quantity) lines, rounded to cents
pub fn sum_lines<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (f64, i32)>,
{
    let total: Decimal = lines
        .into_iter()
        .map(|(price, quantity)| to_decimal(price) * Decimal::from(quantity))
        .sum();
    round(total).to_f64().unwrap_or(0.0)
}
