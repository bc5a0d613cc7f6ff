// ============================================================================
// Fixed-Point Decimal
// Scaled-integer decimal with compile-time precision and rounding policy
// ============================================================================

use super::arith;
use super::errors::{NumericError, NumericResult};
use super::stored::StoredDecimal;
use super::DynDecimal;
use crate::engine::exponent;
use crate::engine::mul_div::{mul_div, Outcome};
use crate::engine::precision::{self, factor, MAX_PRECISION};
use crate::engine::rounding::Nearest;
use crate::interfaces::{AutoRound, MixingMode, RoundingPolicy, ScaledValue};
use crate::text::{NumericLocale, ParsedText};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::marker::PhantomData;
use std::str::FromStr;

/// Fixed-point decimal number with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an i64.
///
/// # Type Parameters
/// - `DECIMALS`: Number of decimal places (0-18). Default is 9.
/// - `R`: Rounding policy applied whenever digits are dropped. Default is
///   [`Nearest`] (half away from zero).
/// - `M`: Which operand precisions the mixed operators accept. Default is
///   [`AutoRound`].
///
/// # Value Range
/// With DECIMALS=9 (default):
/// - Minimum: -9,223,372,036.854775808
/// - Maximum: +9,223,372,036.854775807
/// - Precision: 0.000000001 (one nano-unit)
///
/// # Example
/// ```
/// use scaled_decimal::numeric::FixedDecimal;
///
/// let ten = FixedDecimal::<2>::from_integer(10).unwrap();
/// let three = FixedDecimal::<2>::from_integer(3).unwrap();
/// assert_eq!((ten / three).to_string(), "3.33");
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct FixedDecimal<const DECIMALS: u8 = 9, R = Nearest, M = AutoRound>(
    i64,
    PhantomData<(R, M)>,
);

impl<const D: u8, R: RoundingPolicy, M: MixingMode> FixedDecimal<D, R, M> {
    const VALID_PRECISION: () = assert!(D <= MAX_PRECISION, "FixedDecimal precision above 18");

    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = factor(D);

    /// Digits after the decimal point
    pub const PRECISION: u8 = D;

    /// Zero value
    pub const ZERO: Self = Self::from_raw(0);

    /// One (1.0)
    pub const ONE: Self = Self::from_raw(Self::SCALE);

    /// Maximum representable value
    pub const MAX: Self = Self::from_raw(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self::from_raw(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        let () = Self::VALID_PRECISION;
        Self(raw, PhantomData)
    }

    /// Replace the raw internal representation.
    #[inline]
    pub fn set_raw(&mut self, raw: i64) {
        self.0 = raw;
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(value: i64) -> NumericResult<Self> {
        arith::scale_integer(value, D).map(Self::from_raw)
    }

    /// Create from an unsigned integer value.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_unsigned(value: u64) -> NumericResult<Self> {
        arith::scale_unsigned(value, D).map(Self::from_raw)
    }

    /// Create from integer and fractional parts.
    ///
    /// # Arguments
    /// - `integer`: The integer part (can be negative)
    /// - `fraction`: The fractional part (must be < SCALE, always positive)
    ///
    /// # Example
    /// ```
    /// // 123.456 with 9 decimals
    /// let x = scaled_decimal::numeric::FixedDecimal::<9>::from_parts(123, 456_000_000).unwrap();
    /// assert_eq!(x.to_string(), "123.456000000");
    /// ```
    #[inline]
    pub fn from_parts(integer: i64, fraction: u64) -> NumericResult<Self> {
        if fraction >= Self::SCALE as u64 {
            return Err(NumericError::InvalidInput);
        }

        let int_scaled = arith::scale_integer(integer, D)?;

        let frac_signed = if integer < 0 {
            -(fraction as i64)
        } else {
            fraction as i64
        };

        arith::add(int_scaled, frac_signed).map(Self::from_raw)
    }

    /// Create from a double, rounding the fractional part through `R`.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN or infinities
    /// - `Overflow`/`Underflow` if the value is too large to represent
    #[inline]
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        arith::from_f64::<R>(value, D).map(Self::from_raw)
    }

    /// Create from a raw value expressed at another precision.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if widening leaves the i64 range
    #[inline]
    pub fn from_scaled(raw: i64, precision: u8) -> NumericResult<Self> {
        precision::convert::<R>(raw, precision, D).map(Self::from_raw)
    }

    /// Create from `mantissa × 10^exponent`.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is too large to represent.
    #[inline]
    pub fn from_mantissa_exponent(mantissa: i64, exponent: i32) -> NumericResult<Self> {
        exponent::pack::<R>(mantissa, exponent, D).map(Self::from_raw)
    }

    /// Create from the `{ raw, precision }` storage form.
    ///
    /// # Errors
    /// Same as [`from_scaled`](Self::from_scaled).
    #[inline]
    pub fn from_stored(stored: StoredDecimal) -> NumericResult<Self> {
        Self::from_scaled(stored.raw, stored.precision)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    ///
    /// This is the value × 10^DECIMALS.
    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.0
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.0 % Self::SCALE).unsigned_abs()
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        arith::abs(self.0).map(Self::from_raw)
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for `MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        arith::neg(self.0).map(Self::from_raw)
    }

    /// The `{ raw, precision }` storage form.
    #[inline]
    pub const fn to_stored(self) -> StoredDecimal {
        StoredDecimal::new(self.0, D)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        arith::add(self.0, rhs.0).map(Self::from_raw)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        arith::sub(self.0, rhs.0).map(Self::from_raw)
    }

    /// Multiplication, reporting whether the lossy wide path was taken.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn mul_outcome(self, rhs: Self) -> NumericResult<Outcome<Self>> {
        mul_div::<R>(self.0, rhs.0, Self::SCALE).map(|out| out.map(Self::from_raw))
    }

    /// Checked multiplication, rounded through `R`.
    ///
    /// The full product never needs to fit in 64 bits, only the result.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.mul_outcome(rhs).map(|out| out.value)
    }

    /// Division, reporting whether the lossy wide path was taken.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the result is out of range
    #[inline]
    pub fn div_outcome(self, rhs: Self) -> NumericResult<Outcome<Self>> {
        mul_div::<R>(self.0, Self::SCALE, rhs.0).map(|out| out.map(Self::from_raw))
    }

    /// Checked division, rounded through `R`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the result is out of range
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.div_outcome(rhs).map(|out| out.value)
    }

    /// Multiply by an integer (no scaling needed).
    ///
    /// More efficient than `checked_mul` when multiplying by a whole number.
    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        arith::mul_int(self.0, rhs).map(Self::from_raw)
    }

    /// Divide by an integer, rounded through `R`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs == 0`
    /// - `Overflow` for `MIN / -1`
    #[inline]
    pub fn checked_div_int(self, rhs: i64) -> NumericResult<Self> {
        arith::div_int::<R>(self.0, rhs).map(Self::from_raw)
    }

    // ========================================================================
    // Mixed-Precision Arithmetic
    // ========================================================================

    /// Add a value of any precision; the result keeps precision `D`.
    ///
    /// # Errors
    /// - `ScaleMismatch` if `M` rejects the operand's precision
    /// - `Overflow`/`Underflow` if the result is out of range
    pub fn add_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(D, rhs.precision())?;
        let rhs = precision::convert::<R>(rhs.raw_value(), rhs.precision(), D)?;
        arith::add(self.0, rhs).map(Self::from_raw)
    }

    /// Subtract a value of any precision; the result keeps precision `D`.
    ///
    /// # Errors
    /// Same as [`add_mixed`](Self::add_mixed).
    pub fn sub_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(D, rhs.precision())?;
        let rhs = precision::convert::<R>(rhs.raw_value(), rhs.precision(), D)?;
        arith::sub(self.0, rhs).map(Self::from_raw)
    }

    /// Multiply by a value of any precision; the result keeps precision `D`.
    ///
    /// # Errors
    /// Same as [`add_mixed`](Self::add_mixed).
    pub fn mul_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(D, rhs.precision())?;
        mul_div::<R>(self.0, rhs.raw_value(), rhs.scale_factor()).map(|out| Self::from_raw(out.value))
    }

    /// Divide by a value of any precision; the result keeps precision `D`.
    ///
    /// # Errors
    /// - `ScaleMismatch` if `M` rejects the operand's precision
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the result is out of range
    pub fn div_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(D, rhs.precision())?;
        mul_div::<R>(self.0, rhs.scale_factor(), rhs.raw_value()).map(|out| Self::from_raw(out.value))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Re-express at another compile-time precision, rounding through `R`.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if widening leaves the i64 range.
    #[inline]
    pub fn rescale<const D2: u8>(self) -> NumericResult<FixedDecimal<D2, R, M>> {
        FixedDecimal::<D2, R, M>::from_scaled(self.0, D)
    }

    /// Same value with the precision carried at runtime.
    #[inline]
    pub fn to_dyn(self) -> DynDecimal<R, M> {
        DynDecimal::from(self)
    }

    /// Convert from rust_decimal::Decimal, rounding extra digits through `R`.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if the value is too large.
    #[inline]
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        arith::from_decimal::<R>(d, D).map(Self::from_raw)
    }

    /// Convert to rust_decimal::Decimal (exact).
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        arith::to_decimal(self.0, D)
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Parse text using the given locale's punctuation.
    ///
    /// # Errors
    /// - `Parse(_)` if the text is not a number
    /// - `Overflow`/`Underflow` if the value is too large
    pub fn parse_with(s: &str, locale: &NumericLocale) -> NumericResult<Self> {
        ParsedText::parse(s, locale)?.to_raw::<R>(D).map(Self::from_raw)
    }

    /// Parse text, yielding zero together with the failure on error.
    pub fn parse_or_zero(s: &str) -> (Self, Option<NumericError>) {
        match s.parse::<Self>() {
            Ok(value) => (value, None),
            Err(e) => {
                tracing::trace!(input = s, error = %e, "decimal text rejected, using zero");
                (Self::ZERO, Some(e))
            },
        }
    }

    /// Read one number from a byte stream.
    ///
    /// # Errors
    /// Same as [`parse_with`](Self::parse_with), plus
    /// `Parse(StreamFault)` on read errors.
    pub fn read_from(reader: impl Read, locale: &NumericLocale) -> NumericResult<Self> {
        ParsedText::read(reader, locale)?.to_raw::<R>(D).map(Self::from_raw)
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> ScaledValue for FixedDecimal<D, R, M> {
    type Rounding = R;

    #[inline]
    fn raw_value(&self) -> i64 {
        self.0
    }

    #[inline]
    fn precision(&self) -> u8 {
        D
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const D: u8, R: RoundingPolicy, M: MixingMode> Default for FixedDecimal<D, R, M> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> PartialEq for FixedDecimal<D, R, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> Eq for FixedDecimal<D, R, M> {}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> PartialOrd for FixedDecimal<D, R, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> Ord for FixedDecimal<D, R, M> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> Hash for FixedDecimal<D, R, M> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> TryFrom<DynDecimal<R, M>>
    for FixedDecimal<D, R, M>
{
    type Error = NumericError;

    /// Rescales to `D`, rounding through `R`.
    fn try_from(value: DynDecimal<R, M>) -> NumericResult<Self> {
        Self::from_scaled(value.raw_value(), value.precision())
    }
}

// Operators panic on error, like the primitive integer operators;
// use checked_* where failure must be handled.
checked_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    Add::add(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => add_mixed, "FixedDecimal addition overflow");
checked_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    Sub::sub(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => sub_mixed, "FixedDecimal subtraction overflow");
checked_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    Mul::mul(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => mul_mixed, "FixedDecimal multiplication overflow");
checked_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    Div::div(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => div_mixed, "FixedDecimal division failed");

checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Add::add(DynDecimal<R, M>) for FixedDecimal<D, R, M> => add_mixed, "FixedDecimal addition overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Sub::sub(DynDecimal<R, M>) for FixedDecimal<D, R, M> => sub_mixed, "FixedDecimal subtraction overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Mul::mul(DynDecimal<R, M>) for FixedDecimal<D, R, M> => mul_mixed, "FixedDecimal multiplication overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Div::div(DynDecimal<R, M>) for FixedDecimal<D, R, M> => div_mixed, "FixedDecimal division failed");

checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Mul::mul(i64) for FixedDecimal<D, R, M> => checked_mul_int, "FixedDecimal multiplication overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Div::div(i64) for FixedDecimal<D, R, M> => checked_div_int, "FixedDecimal division failed");

checked_assign_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    AddAssign::add_assign(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => add_mixed, "FixedDecimal addition overflow");
checked_assign_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    SubAssign::sub_assign(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => sub_mixed, "FixedDecimal subtraction overflow");
checked_assign_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    MulAssign::mul_assign(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => mul_mixed, "FixedDecimal multiplication overflow");
checked_assign_operator!(impl[const D: u8, const D2: u8, R: RoundingPolicy, M: MixingMode]
    DivAssign::div_assign(FixedDecimal<D2, R, M>) for FixedDecimal<D, R, M> => div_mixed, "FixedDecimal division failed");
checked_assign_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    MulAssign::mul_assign(i64) for FixedDecimal<D, R, M> => checked_mul_int, "FixedDecimal multiplication overflow");
checked_assign_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    DivAssign::div_assign(i64) for FixedDecimal<D, R, M> => checked_div_int, "FixedDecimal division failed");

impl<const D: u8, R: RoundingPolicy, M: MixingMode> std::ops::Neg for FixedDecimal<D, R, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("FixedDecimal negation overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8, R: RoundingPolicy, M: MixingMode> fmt::Debug for FixedDecimal<D, R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedDecimal<{}, {}>({}, raw={})", D, R::MODE, self, self.0)
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> fmt::Display for FixedDecimal<D, R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&NumericLocale::C))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const D: u8, R: RoundingPolicy, M: MixingMode> FromStr for FixedDecimal<D, R, M> {
    type Err = NumericError;

    /// Parse from decimal text in the "C" locale.
    ///
    /// # Examples
    /// - "123" -> 123.000000000
    /// - "123.456" -> 123.456000000
    /// - "-0.001" -> -0.001000000
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &NumericLocale::C)
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<const D: u8, R: RoundingPolicy, M: MixingMode> serde::Serialize for FixedDecimal<D, R, M> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_stored(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: u8, R: RoundingPolicy, M: MixingMode> serde::Deserialize<'de>
    for FixedDecimal<D, R, M>
{
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let stored = <StoredDecimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_stored(stored).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Currency amount in cents
pub type Money = FixedDecimal<2>;

/// Rate or ratio with 9 decimal places
pub type Ratio = FixedDecimal<9>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rounding::{Ceiling, Floor, HalfEven, Truncate};
    use crate::interfaces::{LowerOrEqual, SamePrecision};
    use crate::numeric::ParseError;

    type FD9 = FixedDecimal<9>;
    type FD2 = FixedDecimal<2>;

    #[test]
    fn test_constants() {
        assert_eq!(FD9::SCALE, 1_000_000_000);
        assert_eq!(FD9::ZERO.raw_value(), 0);
        assert_eq!(FD9::ONE.raw_value(), 1_000_000_000);
        assert_eq!(FixedDecimal::<0>::SCALE, 1);
        assert_eq!(FixedDecimal::<18>::SCALE, 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_from_integer() {
        let x = FD9::from_integer(100).unwrap();
        assert_eq!(x.raw_value(), 100_000_000_000);
        assert_eq!(x.integer_part(), 100);
        assert_eq!(x.fractional_part(), 0);

        assert_eq!(
            FD9::from_integer(10_000_000_000),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            FD9::from_integer(-10_000_000_000),
            Err(NumericError::Underflow)
        );
        assert_eq!(FD2::from_unsigned(7).unwrap().raw_value(), 700);
    }

    #[test]
    fn test_from_parts() {
        // 123.456
        let x = FD9::from_parts(123, 456_000_000).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 456_000_000);
        assert_eq!(x.to_string(), "123.456000000");

        // -5.5
        let y = FD9::from_parts(-5, 500_000_000).unwrap();
        assert_eq!(y.integer_part(), -5);
        assert_eq!(y.fractional_part(), 500_000_000);
        assert!(y.is_negative());

        // Fraction >= SCALE should fail
        let result = FD9::from_parts(1, 1_000_000_000);
        assert_eq!(result, Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(FD2::from_f64(3.14159).unwrap().raw_value(), 314);
        assert_eq!(FD2::from_f64(-0.125).unwrap().raw_value(), -13);
        assert_eq!(
            FixedDecimal::<2, HalfEven>::from_f64(-0.125).unwrap().raw_value(),
            -12
        );
        assert_eq!(FD2::from_f64(f64::NAN), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_scaled() {
        // 1.2345 at precision 4 into precision 2
        assert_eq!(FD2::from_scaled(12_345, 4).unwrap().raw_value(), 123);
        assert_eq!(
            FixedDecimal::<2, Ceiling>::from_scaled(12_301, 4)
                .unwrap()
                .raw_value(),
            124
        );
        assert_eq!(FD9::from_scaled(15, 1).unwrap().to_string(), "1.500000000");
        assert_eq!(
            FD2::from_scaled(1, 19),
            Err(NumericError::PrecisionOutOfRange(19))
        );
    }

    #[test]
    fn test_set_raw() {
        let mut x = FD2::ZERO;
        x.set_raw(1_999);
        assert_eq!(x.to_string(), "19.99");
        assert_eq!(x.to_stored(), StoredDecimal::new(1_999, 2));
    }

    #[test]
    fn test_checked_add() {
        let a = FD9::from_integer(100).unwrap();
        let b = FD9::from_integer(50).unwrap();
        let c = a.checked_add(b).unwrap();
        assert_eq!(c.integer_part(), 150);

        // Overflow
        let result = FD9::MAX.checked_add(FD9::ONE);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_checked_sub() {
        let a = FD9::from_integer(100).unwrap();
        let b = FD9::from_integer(30).unwrap();
        let c = a.checked_sub(b).unwrap();
        assert_eq!(c.integer_part(), 70);

        // Negative result
        let d = b.checked_sub(a).unwrap();
        assert_eq!(d.integer_part(), -70);

        // Underflow
        let result = FD9::MIN.checked_sub(FD9::ONE);
        assert_eq!(result, Err(NumericError::Underflow));
    }

    #[test]
    fn test_checked_mul() {
        // 2.5 * 4.0 = 10.0
        let a = FD9::from_parts(2, 500_000_000).unwrap();
        let b = FD9::from_integer(4).unwrap();
        let c = a.checked_mul(b).unwrap();
        assert_eq!(c.integer_part(), 10);
        assert_eq!(c.fractional_part(), 0);

        // 1.5 * 1.5 = 2.25
        let x = FD9::from_parts(1, 500_000_000).unwrap();
        let y = x.checked_mul(x).unwrap();
        assert_eq!(y.integer_part(), 2);
        assert_eq!(y.fractional_part(), 250_000_000);
    }

    #[test]
    fn test_checked_mul_rounding() {
        // 0.15 * 0.15 = 0.0225
        let x = FD2::from_raw(15);
        assert_eq!(x.checked_mul(x).unwrap().raw_value(), 2);
        let x = FixedDecimal::<2, Ceiling>::from_raw(15);
        assert_eq!(x.checked_mul(x).unwrap().raw_value(), 3);
        // 0.05 * 0.5 = 0.025
        let a = FixedDecimal::<2, HalfEven>::from_raw(5);
        let b = FixedDecimal::<2, HalfEven>::from_raw(50);
        assert_eq!(a.checked_mul(b).unwrap().raw_value(), 2);
    }

    #[test]
    fn test_checked_mul_overflow() {
        let large = FD9::from_integer(1_000_000_000).unwrap();
        assert_eq!(large.checked_mul(large), Err(NumericError::Overflow));
        assert_eq!(large.checked_mul(-large), Err(NumericError::Underflow));
    }

    #[test]
    fn test_mul_wide_product_is_exact() {
        // 9e9 * 1.000000001 needs more than 64 bits before scaling back
        let a = FD9::from_integer(9_000_000_000).unwrap();
        let b = FD9::from_raw(1_000_000_001);
        let out = a.mul_outcome(b).unwrap();
        assert!(!out.lossy);
        assert_eq!(out.value.raw_value(), 9_000_000_009_000_000_000);
    }

    #[test]
    fn test_checked_div() {
        let ten = FD2::from_integer(10).unwrap();
        let three = FD2::from_integer(3).unwrap();
        assert_eq!(ten.checked_div(three).unwrap().to_string(), "3.33");
        assert_eq!(
            FD2::from_integer(20).unwrap().checked_div(three).unwrap().to_string(),
            "6.67"
        );
        assert_eq!(
            FixedDecimal::<2, Truncate>::from_integer(20)
                .unwrap()
                .checked_div(FixedDecimal::from_integer(3).unwrap())
                .unwrap()
                .to_string(),
            "6.66"
        );
        assert_eq!(ten.checked_div(FD2::ZERO), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_int_ops() {
        let x = FD2::from_raw(1_000);
        assert_eq!(x.checked_mul_int(3).unwrap().raw_value(), 3_000);
        assert_eq!(x.checked_div_int(3).unwrap().raw_value(), 333);
        assert_eq!(
            FixedDecimal::<2, Floor>::from_raw(-1_000)
                .checked_div_int(3)
                .unwrap()
                .raw_value(),
            -334
        );
        assert_eq!(x.checked_div_int(0), Err(NumericError::DivisionByZero));
        assert_eq!(FD2::MAX.checked_mul_int(2), Err(NumericError::Overflow));
        assert_eq!(FD2::MAX.checked_mul_int(-2), Err(NumericError::Underflow));
    }

    #[test]
    fn test_mixed_precision_ops() {
        let price = FixedDecimal::<4>::from_raw(12_345); // 1.2345
        let qty = FD2::from_raw(250); // 2.50

        assert_eq!(price.add_mixed(qty).unwrap().raw_value(), 37_345);
        assert_eq!(price.sub_mixed(qty).unwrap().raw_value(), -12_655);
        // 1.2345 * 2.5 = 3.08625 -> 3.0863
        assert_eq!(price.mul_mixed(qty).unwrap().raw_value(), 30_863);
        // 1.2345 / 2.5 = 0.4938
        assert_eq!(price.div_mixed(qty).unwrap().raw_value(), 4_938);

        // Narrowing the operand rounds: 2.50 + 1.2345 -> 3.73
        assert_eq!(qty.add_mixed(price).unwrap().raw_value(), 373);
        // 2.50 * 1.2345 = 3.08625 -> 3.09
        assert_eq!(qty.mul_mixed(price).unwrap().raw_value(), 309);
    }

    #[test]
    fn test_mixing_mode_enforced() {
        let a = FixedDecimal::<4, Nearest, SamePrecision>::from_raw(10_000);
        let b = FixedDecimal::<2, Nearest, SamePrecision>::from_raw(100);
        assert_eq!(a.add_mixed(b), Err(NumericError::ScaleMismatch));
        assert!(a.add_mixed(a).is_ok());

        let wide = FixedDecimal::<4, Nearest, LowerOrEqual>::from_raw(10_000);
        let narrow = FixedDecimal::<2, Nearest, LowerOrEqual>::from_raw(100);
        assert_eq!(wide.add_mixed(narrow).unwrap().raw_value(), 20_000);
        assert_eq!(narrow.add_mixed(wide), Err(NumericError::ScaleMismatch));
    }

    #[test]
    fn test_operators() {
        let a = FD2::from_integer(10).unwrap();
        let b = FD2::from_integer(3).unwrap();
        assert_eq!((a + b).to_string(), "13.00");
        assert_eq!((a - b).to_string(), "7.00");
        assert_eq!((a * b).to_string(), "30.00");
        assert_eq!((a / b).to_string(), "3.33");
        assert_eq!((a * 3i64).to_string(), "30.00");
        assert_eq!((a / 4i64).to_string(), "2.50");
        assert_eq!((-a).to_string(), "-10.00");

        let mut c = a;
        c += b;
        c -= FD2::ONE;
        c *= 2i64;
        c /= FixedDecimal::<0>::from_integer(4).unwrap();
        assert_eq!(c.to_string(), "6.00");
    }

    #[test]
    #[should_panic(expected = "FixedDecimal division failed")]
    fn test_operator_panics_on_division_by_zero() {
        let _ = FD2::ONE / FD2::ZERO;
    }

    #[test]
    fn test_rescale() {
        let x = FixedDecimal::<4>::from_raw(12_355);
        assert_eq!(x.rescale::<2>().unwrap().raw_value(), 124);
        assert_eq!(x.rescale::<6>().unwrap().raw_value(), 1_235_500);
        assert_eq!(x.rescale::<6>().unwrap().rescale::<4>().unwrap(), x);
        assert_eq!(
            FixedDecimal::<0>::MAX.rescale::<1>(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_mantissa_exponent() {
        let x = FD2::from_raw(150);
        let me = x.to_mantissa_exponent();
        assert_eq!((me.mantissa, me.exponent), (15, -1));
        assert_eq!(FD2::from_mantissa_exponent(123, -4).unwrap().raw_value(), 1);
        assert_eq!(
            FD2::from_mantissa_exponent(me.mantissa, me.exponent).unwrap(),
            x
        );
    }

    #[test]
    fn test_comparison() {
        let a = FD9::from_integer(100).unwrap();
        let b = FD9::from_integer(50).unwrap();

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
    }

    #[test]
    fn test_display() {
        let x = FD9::from_parts(123, 456_000_000).unwrap();
        assert_eq!(x.to_string(), "123.456000000");

        let y = FD9::from_integer(0).unwrap();
        assert_eq!(y.to_string(), "0.000000000");

        let neg = -FD9::from_parts(0, 100_000_000).unwrap();
        assert_eq!(neg.to_string(), "-0.100000000");

        assert_eq!(FixedDecimal::<0>::from_raw(-42).to_string(), "-42");
        assert_eq!(format!("{:>8}", FD2::from_raw(-1)), "   -0.01");
    }

    #[test]
    fn test_debug() {
        let x = FD2::from_raw(333);
        assert_eq!(format!("{:?}", x), "FixedDecimal<2, nearest>(3.33, raw=333)");
    }

    #[test]
    fn test_from_str() {
        let x: FD9 = "123.456".parse().unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 456_000_000);

        let y: FD9 = "-0.001".parse().unwrap();
        assert!(y.is_negative());
        assert_eq!(y.fractional_part(), 1_000_000);

        let z: FD9 = "42".parse().unwrap();
        assert_eq!(z.integer_part(), 42);
        assert_eq!(z.fractional_part(), 0);
    }

    #[test]
    fn test_from_str_rounds_excess_digits() {
        let x: FD2 = "-0.005".parse().unwrap();
        assert_eq!(x.raw_value(), -1);
        assert_eq!(x.to_string(), "-0.01");

        let y: FixedDecimal<2, HalfEven> = "2.345".parse().unwrap();
        assert_eq!(y.raw_value(), 234);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<FD9, _> = "not_a_number".parse();
        assert_eq!(result, Err(NumericError::Parse(ParseError::BadCharacter)));

        let result: Result<FD9, _> = "".parse();
        assert_eq!(result, Err(NumericError::Parse(ParseError::NoDigits)));

        let result: Result<FD9, _> = "10000000000".parse();
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_text_round_trip_at_extremes() {
        let min = FixedDecimal::<0>::MIN;
        assert_eq!(min.to_string(), "-9223372036854775808");
        assert_eq!(min.to_string().parse::<FixedDecimal<0>>(), Ok(min));
        let max = FixedDecimal::<0>::MAX;
        assert_eq!(max.to_string().parse::<FixedDecimal<0>>(), Ok(max));

        assert_eq!(
            "-9223372036854775809".parse::<FixedDecimal<0>>(),
            Err(NumericError::Parse(ParseError::Overflow))
        );

        assert_eq!(FD2::MIN.to_string().parse::<FD2>(), Ok(FD2::MIN));
        assert_eq!(FD9::MIN.to_string().parse::<FD9>(), Ok(FD9::MIN));
        let min = FixedDecimal::<18>::MIN;
        assert_eq!(min.to_string().parse::<FixedDecimal<18>>(), Ok(min));
    }

    #[test]
    fn test_parse_or_zero() {
        let (x, err) = FD2::parse_or_zero("12.34");
        assert_eq!((x.raw_value(), err), (1_234, None));

        let (x, err) = FD2::parse_or_zero("x");
        assert!(x.is_zero());
        assert_eq!(err, Some(NumericError::Parse(ParseError::BadCharacter)));
    }

    #[test]
    fn test_parse_with_locale() {
        let de = NumericLocale::new(',').with_grouping('.');
        let x = FD2::parse_with("1.234,5", &de).unwrap();
        assert_eq!(x.raw_value(), 123_450);
        assert_eq!(x.format_with(&de).as_str(), "1234,50");
    }

    #[test]
    fn test_read_from() {
        let input: &[u8] = b"19.999 EUR";
        let x = FD2::read_from(input, &NumericLocale::C).unwrap();
        assert_eq!(x.to_string(), "20.00");
    }

    #[test]
    fn test_decimal_interop() {
        let d = Decimal::new(12345, 2); // 123.45
        let x = FD9::from_decimal(d).unwrap();
        assert_eq!(x.integer_part(), 123);
        assert_eq!(x.fractional_part(), 450_000_000);
        assert_eq!(x.to_decimal().to_string(), "123.450000000");

        assert_eq!(FixedDecimal::<1>::from_decimal(d).unwrap().raw_value(), 1_235);
    }

    #[test]
    fn test_scaled_value_view() {
        let x = FD2::from_raw(-250);
        assert_eq!(ScaledValue::precision(&x), 2);
        assert_eq!(x.scale_factor(), 100);
        assert_eq!(x.signum(), -1);
        assert!((x.to_f64() + 2.5).abs() < f64::EPSILON);
        assert_eq!(x.rescaled_raw(3), Ok(-2_500));
    }

    #[test]
    fn test_abs_and_neg() {
        let x = FD9::from_integer(-100).unwrap();
        assert_eq!(x.abs().unwrap().integer_part(), 100);
        assert_eq!(FD9::MIN.abs(), Err(NumericError::Overflow));
        assert_eq!(FD9::MIN.checked_neg(), Err(NumericError::Overflow));
        assert_eq!((-(-x)).integer_part(), -100);
    }

    #[test]
    fn test_zero_operations() {
        let zero = FD9::ZERO;
        let one = FD9::ONE;

        assert_eq!(zero.checked_add(one).unwrap(), one);
        assert_eq!(one.checked_sub(one).unwrap(), zero);
        assert_eq!(zero.checked_mul(one).unwrap(), zero);
        assert_eq!(zero.checked_div(one).unwrap(), zero);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_storage_form() {
        let x = FD2::from_raw(-333);
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#"{"raw":-333,"precision":2}"#);
        assert_eq!(serde_json::from_str::<FD2>(&json).unwrap(), x);

        // Stored at a different precision: rescaled on the way in
        let y: FD2 = serde_json::from_str(r#"{"raw":12345,"precision":4}"#).unwrap();
        assert_eq!(y.raw_value(), 123);
        assert!(serde_json::from_str::<FD2>(r#"{"raw":1,"precision":30}"#).is_err());
    }
}
