//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` at the struct boundary. Order totals follow a fixed composition:
//! the discount applies to the subtotal, tax applies to the discounted
//! amount, and only the grand total is rounded. Changing that order, or
//! rounding an intermediate amount, changes the final figure.

use rust_decimal::prelude::*;
use shared::models::OrderLine;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed unit price (1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;
/// Maximum allowed percentage for discount/tax inputs
pub const MAX_PERCENT: f64 = 100.0;

/// Derived totals for an order draft
///
/// Not persisted anywhere client-side; recomputed from the line items and
/// percentages on every relevant change. `after_discount` may go negative
/// when the discount exceeds 100%; only `grand_total` is clamped.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub after_discount: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

/// Convert f64 to Decimal for calculation
///
/// Inputs should be validated at the form boundary. If NaN/Infinity somehow
/// reaches here, logs an error and returns ZERO to avoid silent corruption
/// in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, without rounding
///
/// Intermediate amounts keep full precision; rounding happens exactly once,
/// on the grand total.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Recompute a line's total as `quantity * unit_price`
///
/// Tolerant by design: non-finite prices degrade to zero instead of
/// erroring. Callers that need strict input checking validate before this
/// (see the draft's `validate`), not here.
pub fn recalc_line(line: &mut OrderLine) {
    let total = to_decimal(line.unit_price) * Decimal::from(line.quantity);
    line.total_price = to_f64(total);
}

fn subtotal_decimal(items: &[OrderLine]) -> Decimal {
    items.iter().map(|line| to_decimal(line.total_price)).sum()
}

/// Sum of line totals; empty list is zero
pub fn compute_subtotal(items: &[OrderLine]) -> f64 {
    to_f64(subtotal_decimal(items))
}

/// Derive the order totals from line items and percentages
///
/// - `discount_amount = subtotal * discount_percent / 100`
/// - `tax_amount = (subtotal - discount_amount) * tax_percent / 100`
/// - `grand_total = max(0, round(after_discount + tax_amount))`, rounded
///   half-away-from-zero to a whole amount
///
/// Pure and infallible; safe to call on every keystroke.
pub fn compute_totals(items: &[OrderLine], discount_percent: f64, tax_percent: f64) -> OrderTotals {
    let subtotal = subtotal_decimal(items);
    let discount_amount = subtotal * to_decimal(discount_percent) / Decimal::ONE_HUNDRED;
    let after_discount = subtotal - discount_amount;
    let tax_amount = after_discount * to_decimal(tax_percent) / Decimal::ONE_HUNDRED;
    let grand_total = (after_discount + tax_amount)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO);

    OrderTotals {
        subtotal: to_f64(subtotal),
        discount_amount: to_f64(discount_amount),
        after_discount: to_f64(after_discount),
        tax_amount: to_f64(tax_amount),
        grand_total: to_f64(grand_total),
    }
}

/// Compare two monetary values for equality (within 0.01 tolerance)
///
/// Used to detect drift between locally computed totals and the figures the
/// backend persisted; drift is reported, never silently overwritten.
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests;
