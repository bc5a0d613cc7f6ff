// ============================================================================
// Runtime-Precision Decimal
// Scaled-integer decimal whose precision is chosen per value at runtime
// ============================================================================

use super::arith;
use super::errors::{NumericError, NumericResult};
use super::stored::StoredDecimal;
use super::FixedDecimal;
use crate::engine::exponent;
use crate::engine::mul_div::{mul_div, Outcome};
use crate::engine::precision::{self, factor, MAX_PRECISION};
use crate::engine::rounding::Nearest;
use crate::interfaces::{AutoRound, MixingMode, RoundingMode, RoundingPolicy, ScaledValue};
use crate::text::{NumericLocale, ParsedText};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::io::Read;
use std::marker::PhantomData;
use std::str::FromStr;

/// Decimal number carrying its precision as a field.
///
/// The precision is fixed at construction and always in `0..=18`. Results
/// of arithmetic keep the precision of the left operand; the right operand
/// may have any precision allowed by `M`.
///
/// Equality, ordering and hashing are by value, so `1.5` at precision 1
/// equals `1.50` at precision 2.
///
/// # Example
/// ```
/// use scaled_decimal::numeric::DynDecimal;
///
/// let price: DynDecimal = "1.2345".parse().unwrap();
/// let qty: DynDecimal = DynDecimal::from_integer(3, 0).unwrap();
/// assert_eq!(price.precision(), 4);
/// assert_eq!((price * qty).to_string(), "3.7035");
/// ```
#[derive(Clone, Copy)]
pub struct DynDecimal<R = Nearest, M = AutoRound> {
    raw: i64,
    precision: u8,
    _policy: PhantomData<(R, M)>,
}

impl<R: RoundingPolicy, M: MixingMode> DynDecimal<R, M> {
    /// Callers guarantee `precision <= 18`.
    #[inline]
    const fn new_unchecked(raw: i64, precision: u8) -> Self {
        Self {
            raw,
            precision,
            _policy: PhantomData,
        }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw value at `precision`.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` if `precision > 18`.
    #[inline]
    pub fn from_raw(raw: i64, precision: u8) -> NumericResult<Self> {
        precision::validate(precision).map(|p| Self::new_unchecked(raw, p))
    }

    /// Zero at `precision`.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` if `precision > 18`.
    #[inline]
    pub fn zero(precision: u8) -> NumericResult<Self> {
        Self::from_raw(0, precision)
    }

    /// Replace the raw value, keeping the precision.
    #[inline]
    pub fn set_raw(&mut self, raw: i64) {
        self.raw = raw;
    }

    /// Create from an integer value.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if the value is too large to represent
    pub fn from_integer(value: i64, precision: u8) -> NumericResult<Self> {
        let precision = precision::validate(precision)?;
        arith::scale_integer(value, precision).map(|raw| Self::new_unchecked(raw, precision))
    }

    /// Create from an unsigned integer value.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow` if the value is too large to represent
    pub fn from_unsigned(value: u64, precision: u8) -> NumericResult<Self> {
        let precision = precision::validate(precision)?;
        arith::scale_unsigned(value, precision).map(|raw| Self::new_unchecked(raw, precision))
    }

    /// Create from a double, rounding the fractional part through `R`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `InvalidInput` for NaN or infinities
    /// - `Overflow`/`Underflow` if the value is too large to represent
    pub fn from_f64(value: f64, precision: u8) -> NumericResult<Self> {
        let precision = precision::validate(precision)?;
        arith::from_f64::<R>(value, precision).map(|raw| Self::new_unchecked(raw, precision))
    }

    /// Create at `precision` from a raw value expressed at `raw_precision`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if either precision exceeds 18
    /// - `Overflow`/`Underflow` if widening leaves the i64 range
    pub fn from_scaled(raw: i64, raw_precision: u8, precision: u8) -> NumericResult<Self> {
        precision::convert::<R>(raw, raw_precision, precision)
            .map(|raw| Self::new_unchecked(raw, precision))
    }

    /// Create at `precision` from `mantissa × 10^exponent`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if the value is too large to represent
    pub fn from_mantissa_exponent(mantissa: i64, exponent: i32, precision: u8) -> NumericResult<Self> {
        exponent::pack::<R>(mantissa, exponent, precision)
            .map(|raw| Self::new_unchecked(raw, precision))
    }

    /// Create from the `{ raw, precision }` storage form, keeping its precision.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` if the stored precision exceeds 18.
    #[inline]
    pub fn from_stored(stored: StoredDecimal) -> NumericResult<Self> {
        Self::from_raw(stored.raw, stored.precision)
    }

    /// Convert from rust_decimal::Decimal, rounding extra digits through `R`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if the value is too large
    pub fn from_decimal(d: Decimal, precision: u8) -> NumericResult<Self> {
        let precision = precision::validate(precision)?;
        arith::from_decimal::<R>(d, precision).map(|raw| Self::new_unchecked(raw, precision))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn raw_value(self) -> i64 {
        self.raw
    }

    #[inline]
    pub const fn precision(self) -> u8 {
        self.precision
    }

    /// Get the integer part (truncated toward zero).
    #[inline]
    pub const fn integer_part(self) -> i64 {
        self.raw / factor(self.precision)
    }

    /// Get the fractional part as a positive value.
    #[inline]
    pub const fn fractional_part(self) -> u64 {
        (self.raw % factor(self.precision)).unsigned_abs()
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.raw == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.raw > 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.raw < 0
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for a raw value of `i64::MIN`.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        arith::abs(self.raw).map(|raw| self.with_raw(raw))
    }

    /// Checked negation.
    ///
    /// # Errors
    /// Returns `Overflow` for a raw value of `i64::MIN`.
    #[inline]
    pub fn checked_neg(self) -> NumericResult<Self> {
        arith::neg(self.raw).map(|raw| self.with_raw(raw))
    }

    /// The `{ raw, precision }` storage form.
    #[inline]
    pub const fn to_stored(self) -> StoredDecimal {
        StoredDecimal::new(self.raw, self.precision)
    }

    /// Convert to rust_decimal::Decimal (exact).
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        arith::to_decimal(self.raw, self.precision)
    }

    #[inline]
    fn with_raw(self, raw: i64) -> Self {
        Self::new_unchecked(raw, self.precision)
    }

    /// Raw value widened to `precision >= self.precision`, in i128.
    #[inline]
    fn widened(self, precision: u8) -> i128 {
        i128::from(self.raw) * i128::from(factor(precision - self.precision))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition; the result keeps this value's precision.
    ///
    /// # Errors
    /// - `ScaleMismatch` if `M` rejects the operand's precision
    /// - `Overflow`/`Underflow` if the result is out of range
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.add_mixed(rhs)
    }

    /// Checked subtraction; the result keeps this value's precision.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.sub_mixed(rhs)
    }

    /// Multiplication, reporting whether the lossy wide path was taken.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn mul_outcome(self, rhs: Self) -> NumericResult<Outcome<Self>> {
        M::check(self.precision, rhs.precision)?;
        mul_div::<R>(self.raw, rhs.raw, factor(rhs.precision)).map(|out| out.map(|raw| self.with_raw(raw)))
    }

    /// Checked multiplication, rounded through `R`.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        self.mul_outcome(rhs).map(|out| out.value)
    }

    /// Division, reporting whether the lossy wide path was taken.
    ///
    /// # Errors
    /// - `ScaleMismatch` if `M` rejects the operand's precision
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow`/`Underflow` if the result is out of range
    pub fn div_outcome(self, rhs: Self) -> NumericResult<Outcome<Self>> {
        M::check(self.precision, rhs.precision)?;
        mul_div::<R>(self.raw, factor(rhs.precision), rhs.raw).map(|out| out.map(|raw| self.with_raw(raw)))
    }

    /// Checked division, rounded through `R`.
    ///
    /// # Errors
    /// Same as [`div_outcome`](Self::div_outcome).
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        self.div_outcome(rhs).map(|out| out.value)
    }

    #[inline]
    pub fn checked_mul_int(self, rhs: i64) -> NumericResult<Self> {
        arith::mul_int(self.raw, rhs).map(|raw| self.with_raw(raw))
    }

    /// Divide by an integer, rounded through `R`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs == 0`
    /// - `Overflow` for a raw value of `i64::MIN` divided by -1
    #[inline]
    pub fn checked_div_int(self, rhs: i64) -> NumericResult<Self> {
        arith::div_int::<R>(self.raw, rhs).map(|raw| self.with_raw(raw))
    }

    /// Add a value of any precision.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn add_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(self.precision, rhs.precision())?;
        let rhs = precision::convert::<R>(rhs.raw_value(), rhs.precision(), self.precision)?;
        arith::add(self.raw, rhs).map(|raw| self.with_raw(raw))
    }

    /// Subtract a value of any precision.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn sub_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(self.precision, rhs.precision())?;
        let rhs = precision::convert::<R>(rhs.raw_value(), rhs.precision(), self.precision)?;
        arith::sub(self.raw, rhs).map(|raw| self.with_raw(raw))
    }

    /// Multiply by a value of any precision.
    ///
    /// # Errors
    /// Same as [`checked_add`](Self::checked_add).
    pub fn mul_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(self.precision, rhs.precision())?;
        mul_div::<R>(self.raw, rhs.raw_value(), rhs.scale_factor()).map(|out| self.with_raw(out.value))
    }

    /// Divide by a value of any precision.
    ///
    /// # Errors
    /// Same as [`div_outcome`](Self::div_outcome).
    pub fn div_mixed<S: ScaledValue>(self, rhs: S) -> NumericResult<Self> {
        M::check(self.precision, rhs.precision())?;
        mul_div::<R>(self.raw, rhs.scale_factor(), rhs.raw_value()).map(|out| self.with_raw(out.value))
    }

    // ========================================================================
    // Precision
    // ========================================================================

    /// The same value at another precision, rounding through `R`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if widening leaves the i64 range
    #[inline]
    pub fn rescale(self, precision: u8) -> NumericResult<Self> {
        Self::from_scaled(self.raw, self.precision, precision)
    }

    /// Round to `dp` decimal places through `R`, keeping the precision.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if rounding up leaves the i64 range.
    #[inline]
    pub fn round_dp(self, dp: u8) -> NumericResult<Self> {
        self.round_dp_with(dp, R::MODE)
    }

    /// Round to `dp` decimal places under `mode`, keeping the precision.
    ///
    /// ```
    /// use scaled_decimal::interfaces::RoundingMode;
    /// use scaled_decimal::numeric::DynDecimal;
    ///
    /// let x: DynDecimal = "2.345".parse().unwrap();
    /// let y = x.round_dp_with(2, RoundingMode::HalfEven).unwrap();
    /// assert_eq!(y.to_string(), "2.340");
    /// ```
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if rounding up leaves the i64 range.
    pub fn round_dp_with(self, dp: u8, mode: RoundingMode) -> NumericResult<Self> {
        if dp >= self.precision {
            return Ok(self);
        }

        let dropped = self.precision - dp;
        let rounded = mode
            .round(arith::to_decimal(self.raw, dropped))
            .ok_or_else(|| arith::out_of_range(self.raw < 0))?;
        arith::scale_integer(rounded, dropped).map(|raw| self.with_raw(raw))
    }

    /// The same value as a compile-time precision decimal, rounding through `R`.
    ///
    /// # Errors
    /// Returns `Overflow`/`Underflow` if widening leaves the i64 range.
    #[inline]
    pub fn to_fixed<const D: u8>(self) -> NumericResult<FixedDecimal<D, R, M>> {
        FixedDecimal::from_scaled(self.raw, self.precision)
    }

    // ========================================================================
    // Text
    // ========================================================================

    /// Parse "C" locale text into a value at `precision`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Parse(_)` if the text is not a number
    /// - `Overflow`/`Underflow` if the value is too large
    #[inline]
    pub fn parse(s: &str, precision: u8) -> NumericResult<Self> {
        Self::parse_with(s, precision, &NumericLocale::C)
    }

    /// Parse text using the locale's punctuation into a value at `precision`.
    ///
    /// # Errors
    /// Same as [`parse`](Self::parse).
    pub fn parse_with(s: &str, precision: u8, locale: &NumericLocale) -> NumericResult<Self> {
        let raw = ParsedText::parse(s, locale)?.to_raw::<R>(precision)?;
        Ok(Self::new_unchecked(raw, precision))
    }

    /// Parse text at `precision`, yielding zero together with the failure on
    /// error. An out-of-range precision yields zero at precision 18.
    pub fn parse_or_zero(s: &str, precision: u8) -> (Self, Option<NumericError>) {
        match Self::parse(s, precision) {
            Ok(value) => (value, None),
            Err(e) => {
                tracing::trace!(input = s, precision, error = %e, "decimal text rejected, using zero");
                (Self::new_unchecked(0, precision.min(MAX_PRECISION)), Some(e))
            },
        }
    }

    /// Read one number from a byte stream into a value at `precision`.
    ///
    /// # Errors
    /// Same as [`parse`](Self::parse), plus `Parse(StreamFault)` on read
    /// errors.
    pub fn read_from(reader: impl Read, precision: u8, locale: &NumericLocale) -> NumericResult<Self> {
        let raw = ParsedText::read(reader, locale)?.to_raw::<R>(precision)?;
        Ok(Self::new_unchecked(raw, precision))
    }
}

impl<R: RoundingPolicy, M: MixingMode> ScaledValue for DynDecimal<R, M> {
    type Rounding = R;

    #[inline]
    fn raw_value(&self) -> i64 {
        self.raw
    }

    #[inline]
    fn precision(&self) -> u8 {
        self.precision
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<R: RoundingPolicy, M: MixingMode> Default for DynDecimal<R, M> {
    /// Zero at precision 0
    #[inline]
    fn default() -> Self {
        Self::new_unchecked(0, 0)
    }
}

impl<R: RoundingPolicy, M: MixingMode> PartialEq for DynDecimal<R, M> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<R: RoundingPolicy, M: MixingMode> Eq for DynDecimal<R, M> {}

impl<R: RoundingPolicy, M: MixingMode> PartialOrd for DynDecimal<R, M> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: RoundingPolicy, M: MixingMode> Ord for DynDecimal<R, M> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.precision == other.precision {
            return self.raw.cmp(&other.raw);
        }
        let precision = self.precision.max(other.precision);
        self.widened(precision).cmp(&other.widened(precision))
    }
}

impl<R: RoundingPolicy, M: MixingMode> Hash for DynDecimal<R, M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Canonical form, so values equal across precisions hash alike
        let me = self.to_mantissa_exponent();
        if me.mantissa == 0 {
            0i64.hash(state);
            0i32.hash(state);
        } else {
            me.mantissa.hash(state);
            me.exponent.hash(state);
        }
    }
}

impl<const D: u8, R: RoundingPolicy, M: MixingMode> From<FixedDecimal<D, R, M>> for DynDecimal<R, M> {
    #[inline]
    fn from(value: FixedDecimal<D, R, M>) -> Self {
        Self::new_unchecked(value.raw_value(), D)
    }
}

checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Add::add(DynDecimal<R, M>) for DynDecimal<R, M> => add_mixed, "DynDecimal addition overflow");
checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Sub::sub(DynDecimal<R, M>) for DynDecimal<R, M> => sub_mixed, "DynDecimal subtraction overflow");
checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Mul::mul(DynDecimal<R, M>) for DynDecimal<R, M> => mul_mixed, "DynDecimal multiplication overflow");
checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Div::div(DynDecimal<R, M>) for DynDecimal<R, M> => div_mixed, "DynDecimal division failed");

checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Add::add(FixedDecimal<D, R, M>) for DynDecimal<R, M> => add_mixed, "DynDecimal addition overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Sub::sub(FixedDecimal<D, R, M>) for DynDecimal<R, M> => sub_mixed, "DynDecimal subtraction overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Mul::mul(FixedDecimal<D, R, M>) for DynDecimal<R, M> => mul_mixed, "DynDecimal multiplication overflow");
checked_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    Div::div(FixedDecimal<D, R, M>) for DynDecimal<R, M> => div_mixed, "DynDecimal division failed");

checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Mul::mul(i64) for DynDecimal<R, M> => checked_mul_int, "DynDecimal multiplication overflow");
checked_operator!(impl[R: RoundingPolicy, M: MixingMode]
    Div::div(i64) for DynDecimal<R, M> => checked_div_int, "DynDecimal division failed");

checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    AddAssign::add_assign(DynDecimal<R, M>) for DynDecimal<R, M> => add_mixed, "DynDecimal addition overflow");
checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    SubAssign::sub_assign(DynDecimal<R, M>) for DynDecimal<R, M> => sub_mixed, "DynDecimal subtraction overflow");
checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    MulAssign::mul_assign(DynDecimal<R, M>) for DynDecimal<R, M> => mul_mixed, "DynDecimal multiplication overflow");
checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    DivAssign::div_assign(DynDecimal<R, M>) for DynDecimal<R, M> => div_mixed, "DynDecimal division failed");
checked_assign_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    AddAssign::add_assign(FixedDecimal<D, R, M>) for DynDecimal<R, M> => add_mixed, "DynDecimal addition overflow");
checked_assign_operator!(impl[const D: u8, R: RoundingPolicy, M: MixingMode]
    SubAssign::sub_assign(FixedDecimal<D, R, M>) for DynDecimal<R, M> => sub_mixed, "DynDecimal subtraction overflow");
checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    MulAssign::mul_assign(i64) for DynDecimal<R, M> => checked_mul_int, "DynDecimal multiplication overflow");
checked_assign_operator!(impl[R: RoundingPolicy, M: MixingMode]
    DivAssign::div_assign(i64) for DynDecimal<R, M> => checked_div_int, "DynDecimal division failed");

impl<R: RoundingPolicy, M: MixingMode> std::ops::Neg for DynDecimal<R, M> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg().expect("DynDecimal negation overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<R: RoundingPolicy, M: MixingMode> fmt::Debug for DynDecimal<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynDecimal<{}>({}, raw={}, precision={})",
            R::MODE,
            self,
            self.raw,
            self.precision
        )
    }
}

impl<R: RoundingPolicy, M: MixingMode> fmt::Display for DynDecimal<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&NumericLocale::C))
    }
}

impl<R: RoundingPolicy, M: MixingMode> FromStr for DynDecimal<R, M> {
    type Err = NumericError;

    /// Parse "C" locale text, taking the precision from the number of
    /// fractional digits written (at most 18).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = ParsedText::parse(s, &NumericLocale::C)?;
        let precision = parsed.fractional_digit_count;
        let raw = parsed.to_raw::<R>(precision)?;
        Ok(Self::new_unchecked(raw, precision))
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<R: RoundingPolicy, M: MixingMode> serde::Serialize for DynDecimal<R, M> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_stored(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: RoundingPolicy, M: MixingMode> serde::Deserialize<'de> for DynDecimal<R, M> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let stored = <StoredDecimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_stored(stored).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
