// ============================================================================
// Multiply-Divide Engine
// round(a * b / c) on 64-bit scaled values without spurious overflow
// ============================================================================
//
// The product a*b may exceed 64 bits even when a, b and the final quotient
// all fit. Each operand is split against the divisor into an integer and a
// remainder part; only the remainder cross term needs real division.
//
//   a*b/c = a*bI + aI*bD + aD*bD/c
//
// The first two terms are exact. The cross term is rounded through the
// policy, after gcd reduction if needed, and as a last resort through a
// 96-bit decimal, which is flagged as lossy.

use super::rounding::div_rounded_carry;
use crate::interfaces::RoundingPolicy;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;

/// A computed value and whether it went through the lossy wide fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    pub value: T,
    /// The cross term was rounded in 96-bit decimal arithmetic rather than
    /// exact integer arithmetic, so the last unit may differ from the
    /// exactly rounded quotient.
    pub lossy: bool,
}

impl<T> Outcome<T> {
    #[inline]
    pub fn exact(value: T) -> Self {
        Self {
            value,
            lossy: false,
        }
    }

    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            lossy: self.lossy,
        }
    }

    /// The value, or `PrecisionLoss` if it came through the wide fallback.
    #[inline]
    pub fn into_exact(self) -> NumericResult<T> {
        if self.lossy {
            Err(NumericError::PrecisionLoss)
        } else {
            Ok(self.value)
        }
    }
}

/// Compute `round(value1 * value2 / divisor)` under policy `R`.
///
/// # Errors
/// - `DivisionByZero` if `divisor == 0`
/// - `Overflow`/`Underflow` if the quotient does not fit in an i64
pub fn mul_div<R: RoundingPolicy>(
    value1: i64,
    value2: i64,
    divisor: i64,
) -> NumericResult<Outcome<i64>> {
    if divisor == 0 {
        return Err(NumericError::DivisionByZero);
    }
    if value1 == 0 || value2 == 0 {
        return Ok(Outcome::exact(0));
    }

    // The exact quotient has this sign; it picks the error on overflow.
    let negative = (value1 < 0) ^ (value2 < 0) ^ (divisor < 0);
    let out_of_range = if negative {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    };

    // No remainders to split off, and `i64::MIN / -1` would trap below.
    if divisor == -1 {
        let product = -(i128::from(value1) * i128::from(value2));
        return i64::try_from(product)
            .map(Outcome::exact)
            .map_err(|_| out_of_range);
    }

    let value1_int = value1.checked_div(divisor).ok_or(out_of_range)?;
    let mut value1_rem = value1.checked_rem(divisor).ok_or(out_of_range)?;
    let value2_int = value2.checked_div(divisor).ok_or(out_of_range)?;
    let mut value2_rem = value2.checked_rem(divisor).ok_or(out_of_range)?;

    let whole = value1
        .checked_mul(value2_int)
        .and_then(|a| value1_int.checked_mul(value2_rem).and_then(|b| a.checked_add(b)))
        .ok_or(out_of_range)?;

    if value1_rem == 0 || value2_rem == 0 {
        return Ok(Outcome::exact(whole));
    }

    if let Some(value) = cross_term::<R>(whole, value1_rem, value2_rem, divisor) {
        return Ok(Outcome::exact(value));
    }

    // Shrink the remainders against the divisor and retry
    let mut divisor = divisor;
    let c = gcd(value1_rem, divisor);
    if c != 1 {
        value1_rem /= c;
        divisor /= c;
    }
    let c = gcd(value2_rem, divisor);
    if c != 1 {
        value2_rem /= c;
        divisor /= c;
    }

    if let Some(value) = cross_term::<R>(whole, value1_rem, value2_rem, divisor) {
        return Ok(Outcome::exact(value));
    }

    tracing::debug!(
        value1,
        value2,
        divisor,
        rounding = %R::MODE,
        "mul_div cross term overflows i64, using wide decimal fallback"
    );

    wide_cross_term::<R>(whole, value1_rem, value2_rem, divisor)
        .map(|value| Outcome { value, lossy: true })
        .ok_or(out_of_range)
}

/// `whole + round(rem1 * rem2 / divisor)` in i64, if nothing overflows.
#[inline]
fn cross_term<R: RoundingPolicy>(whole: i64, rem1: i64, rem2: i64, divisor: i64) -> Option<i64> {
    let product = rem1.checked_mul(rem2)?;
    div_rounded_carry::<R>(whole, product, divisor)
}

/// Same as [`cross_term`], evaluated in 96-bit decimal arithmetic.
///
/// `rem1 / divisor` is below one in magnitude, so dividing first keeps every
/// intermediate well inside the decimal range.
fn wide_cross_term<R: RoundingPolicy>(
    whole: i64,
    rem1: i64,
    rem2: i64,
    divisor: i64,
) -> Option<i64> {
    let parity = whole % 2;
    let fraction = Decimal::from(rem1)
        .checked_div(Decimal::from(divisor))?
        .checked_mul(Decimal::from(rem2))?
        .checked_add(Decimal::from(parity))?;
    (whole - parity).checked_add(R::round(fraction)?)
}

/// Greatest common divisor of the magnitudes, as a positive i64.
///
/// `a` is a nonzero remainder below 2^63 in magnitude, so the result fits.
fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while a != 0 {
        let c = a;
        a = b % a;
        b = c;
    }
    b as i64
}

// ============================================================================
// Tests
// ============================================================================
