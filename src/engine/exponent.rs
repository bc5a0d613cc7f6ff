// ============================================================================
// Mantissa / Exponent Codec
// Interchange between scaled raw values and mantissa × 10^exponent
// ============================================================================

use super::precision::{self, factor, MAX_PRECISION};
use crate::interfaces::RoundingPolicy;
use crate::numeric::{NumericError, NumericResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `rust_decimal::Decimal` accepts
const MAX_DECIMAL_SCALE: i64 = 28;

/// `mantissa × 10^exponent`.
///
/// Canonical form carries no trailing zero in the mantissa; zero is written
/// as mantissa 0 with exponent `-precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MantissaExponent {
    pub mantissa: i64,
    pub exponent: i32,
}

/// Canonical mantissa/exponent of a raw value at `precision`.
pub fn unpack(raw: i64, precision: u8) -> MantissaExponent {
    let mut mantissa = raw;
    let mut exponent = -i32::from(precision);

    if mantissa != 0 {
        while mantissa % 10 == 0 {
            mantissa /= 10;
            exponent += 1;
        }
    }

    MantissaExponent { mantissa, exponent }
}

/// Raw value at `precision` for `mantissa × 10^exponent`.
///
/// Digits below the target precision are rounded away through `R`.
///
/// # Errors
/// - `PrecisionOutOfRange` if `precision > 18`
/// - `Overflow`/`Underflow` if the value does not fit at `precision`
pub fn pack<R: RoundingPolicy>(mantissa: i64, exponent: i32, precision: u8) -> NumericResult<i64> {
    precision::validate(precision)?;

    if mantissa == 0 {
        return Ok(0);
    }

    let out_of_range = if mantissa > 0 {
        NumericError::Overflow
    } else {
        NumericError::Underflow
    };
    let shift = i64::from(exponent) + i64::from(precision);

    if shift >= 0 {
        if shift > i64::from(MAX_PRECISION) {
            return Err(out_of_range);
        }
        return mantissa.checked_mul(factor(shift as u8)).ok_or(out_of_range);
    }

    let digits = -shift;
    if digits <= i64::from(MAX_PRECISION) {
        return precision::narrow::<R>(mantissa, digits as u8);
    }

    // Past 10^18 the divisor leaves i64. The quotient is below 1 in
    // magnitude and still exact in a decimal up to scale 28. Further out it
    // is below 10^-9, so only its sign and nonzero-ness matter.
    let tiny = if digits <= MAX_DECIMAL_SCALE {
        Decimal::new(mantissa, digits as u32)
    } else {
        Decimal::new(mantissa.signum(), MAX_DECIMAL_SCALE as u32)
    };
    R::round(tiny).ok_or(out_of_range)
}
