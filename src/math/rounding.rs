//! Payout arithmetic with an explicit rounding policy
//!
//! Payouts are carried as `f64`. A standard symbol's reward chain is multiplied
//! out in full precision and rounded to [`PAYOUT_DECIMAL_PLACES`] when it joins
//! the running total; each bonus step rounds its result. Decisions that compare a payout against the wager are made on
//! integer micro-units so that representation noise cannot flip them.

use crate::io::configuration::PAYOUT_DECIMAL_PLACES;

fn scale() -> f64 {
    10_f64.powi(PAYOUT_DECIMAL_PLACES)
}

/// Round an amount to the payout precision
pub fn round_payout(amount: f64) -> f64 {
    (amount * scale()).round() / scale()
}

/// Convert an amount to integer units of the payout precision
pub fn to_fixed_units(amount: f64) -> i128 {
    (amount * scale()).round() as i128
}

/// Whether two amounts are equal at payout precision
pub fn same_amount(left: f64, right: f64) -> bool {
    to_fixed_units(left) == to_fixed_units(right)
}

/// Whether `amount` is strictly greater than `threshold` at payout precision
pub fn exceeds(amount: f64, threshold: f64) -> bool {
    to_fixed_units(amount) > to_fixed_units(threshold)
}

/// Multiply a running amount by a factor, rounding the product
pub fn scaled(amount: f64, factor: f64) -> f64 {
    round_payout(amount * factor)
}
