//! Currency normalization.
//!
//! Prices enter the API as [`Decimal`], are quantized once with [`round2`] at write time and
//! are persisted as `i64` minor units (cents). Reads convert back without further rounding, so
//! sums over stored prices operate on already-rounded values.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::error::{AppError, AppResult};

pub const DECIMAL_PLACES: u32 = 2;

/// Round to two fractional digits, ties away from zero (`2.005 -> 2.01`, `-2.005 -> -2.01`).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Quantize `value` and express it in minor units for storage.
pub fn to_minor_units(value: Decimal) -> AppResult<i64> {
    (round2(value) * Decimal::ONE_HUNDRED)
        .to_i64()
        .ok_or_else(|| AppError::BadRequest(format!("amount {value} is out of range")))
}

pub fn from_minor_units(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// Reject negative prices before they are persisted.
pub fn non_negative_price(value: Decimal, field: &str) -> AppResult<i64> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::BadRequest(format!("{field} must not be negative")));
    }
    to_minor_units(value)
}
