// ============================================================================
// Precision Conversion
// Rescaling raw values between decimal precisions
// ============================================================================

use super::mul_div::mul_div;
use crate::interfaces::RoundingPolicy;
use crate::numeric::{NumericError, NumericResult};

/// Highest supported precision; 10^18 is the largest power of ten in an i64.
pub const MAX_PRECISION: u8 = 18;

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

const fn factor_table() -> [i64; MAX_PRECISION as usize + 1] {
    let mut table = [0i64; MAX_PRECISION as usize + 1];
    let mut p = 0;
    while p <= MAX_PRECISION {
        table[p as usize] = pow10(p);
        p += 1;
    }
    table
}

/// `10^p` for `p` in `0..=18`
pub const PRECISION_FACTORS: [i64; MAX_PRECISION as usize + 1] = factor_table();

/// Reject precisions the factor table cannot serve.
///
/// # Errors
/// Returns `PrecisionOutOfRange` if `precision > 18`.
#[inline]
pub fn validate(precision: u8) -> NumericResult<u8> {
    if precision <= MAX_PRECISION {
        Ok(precision)
    } else {
        Err(NumericError::PrecisionOutOfRange(precision))
    }
}

/// `10^precision`, checked.
///
/// # Errors
/// Returns `PrecisionOutOfRange` if `precision > 18`.
#[inline]
pub fn precision_factor(precision: u8) -> NumericResult<i64> {
    validate(precision).map(factor)
}

/// `10^precision` for a precision already known to be valid.
///
/// Panics (at compile time in const contexts) if `precision > 18`.
#[inline]
pub(crate) const fn factor(precision: u8) -> i64 {
    PRECISION_FACTORS[precision as usize]
}

/// Convert `raw` from precision `from` to precision `to`.
///
/// Widening multiplies exactly. Narrowing divides through the rounding
/// policy and, when its correction would overflow, through [`mul_div`].
///
/// # Errors
/// - `PrecisionOutOfRange` if either precision exceeds 18
/// - `Overflow`/`Underflow` if widening leaves the i64 range
pub fn convert<R: RoundingPolicy>(raw: i64, from: u8, to: u8) -> NumericResult<i64> {
    validate(from)?;
    validate(to)?;

    if to == from {
        Ok(raw)
    } else if to > from {
        widen(raw, to - from)
    } else {
        narrow::<R>(raw, from - to)
    }
}

#[inline]
fn widen(raw: i64, digits: u8) -> NumericResult<i64> {
    raw.checked_mul(factor(digits)).ok_or(if raw > 0 {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    })
}

#[inline]
pub(crate) fn narrow<R: RoundingPolicy>(raw: i64, digits: u8) -> NumericResult<i64> {
    let divisor = factor(digits);
    match R::div_rounded(raw, divisor) {
        Some(value) => Ok(value),
        None => mul_div::<R>(raw, 1, divisor).map(|outcome| outcome.value),
    }
}
