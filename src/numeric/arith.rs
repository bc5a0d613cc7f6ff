// ============================================================================
// Raw Arithmetic
// Checked operations on scaled i64 values, shared by both decimal types
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::engine::mul_div::mul_div;
use crate::engine::precision::factor;
use crate::interfaces::RoundingPolicy;
use rust_decimal::Decimal;

/// `Underflow` for results heading below zero, `Overflow` otherwise.
#[inline]
pub(crate) fn out_of_range(negative: bool) -> NumericError {
    if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    }
}

#[inline]
pub(crate) fn add(a: i64, b: i64) -> NumericResult<i64> {
    a.checked_add(b).ok_or_else(|| out_of_range(b < 0))
}

#[inline]
pub(crate) fn sub(a: i64, b: i64) -> NumericResult<i64> {
    a.checked_sub(b).ok_or_else(|| out_of_range(b > 0))
}

#[inline]
pub(crate) fn neg(raw: i64) -> NumericResult<i64> {
    raw.checked_neg().ok_or(NumericError::Overflow)
}

#[inline]
pub(crate) fn abs(raw: i64) -> NumericResult<i64> {
    raw.checked_abs().ok_or(NumericError::Overflow)
}

/// `value × 10^precision`
#[inline]
pub(crate) fn scale_integer(value: i64, precision: u8) -> NumericResult<i64> {
    value
        .checked_mul(factor(precision))
        .ok_or_else(|| out_of_range(value < 0))
}

#[inline]
pub(crate) fn scale_unsigned(value: u64, precision: u8) -> NumericResult<i64> {
    let value = i64::try_from(value).map_err(|_| NumericError::Overflow)?;
    scale_integer(value, precision)
}

#[inline]
pub(crate) fn mul_int(raw: i64, rhs: i64) -> NumericResult<i64> {
    raw.checked_mul(rhs)
        .ok_or_else(|| out_of_range((raw < 0) != (rhs < 0)))
}

/// `round(raw / rhs)`, falling back to [`mul_div`] when the policy's
/// correction would overflow.
pub(crate) fn div_int<R: RoundingPolicy>(raw: i64, rhs: i64) -> NumericResult<i64> {
    if rhs == 0 {
        return Err(NumericError::DivisionByZero);
    }
    match R::div_rounded(raw, rhs) {
        Some(value) => Ok(value),
        None => mul_div::<R>(raw, 1, rhs).map(|outcome| outcome.value),
    }
}

/// Raw value at `precision` for a `rust_decimal::Decimal`, rounding any
/// digits below the precision through `R`.
pub(crate) fn from_decimal<R: RoundingPolicy>(value: Decimal, precision: u8) -> NumericResult<i64> {
    let negative = value.is_sign_negative();
    let scaled = value
        .checked_mul(Decimal::from(factor(precision)))
        .ok_or_else(|| out_of_range(negative))?;
    R::round(scaled).ok_or_else(|| out_of_range(negative))
}

/// The raw value as an exact `rust_decimal::Decimal`.
#[inline]
pub(crate) fn to_decimal(raw: i64, precision: u8) -> Decimal {
    Decimal::new(raw, u32::from(precision))
}

/// Raw value at `precision` for a double.
///
/// The integer part is taken exactly; the fractional part is scaled in
/// 96-bit decimal arithmetic and rounded through `R`.
///
/// # Errors
/// - `InvalidInput` for NaN or infinite input
/// - `Overflow`/`Underflow` if the value does not fit at `precision`
pub(crate) fn from_f64<R: RoundingPolicy>(value: f64, precision: u8) -> NumericResult<i64> {
    if !value.is_finite() {
        return Err(NumericError::InvalidInput);
    }

    let negative = value < 0.0;
    let whole = value.trunc();
    // i64::MAX is not representable as f64; its nearest double is 2^63
    if whole >= i64::MAX as f64 || whole < i64::MIN as f64 {
        return Err(out_of_range(negative));
    }

    let integer = scale_integer(whole as i64, precision)?;
    let fraction = value - whole;
    if fraction == 0.0 {
        return Ok(integer);
    }

    // A fraction below 10^-28 only moves directed rounding by one unit
    let fraction = Decimal::from_f64_retain(fraction)
        .unwrap_or_else(|| Decimal::new(if negative { -1 } else { 1 }, 28));
    let fraction = from_decimal::<R>(fraction, precision)?;

    add(integer, fraction)
}
