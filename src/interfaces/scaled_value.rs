// ============================================================================
// Scaled Value Interface
// Capability set shared by the compile-time and runtime precision decimals
// ============================================================================

use crate::engine::exponent::{self, MantissaExponent};
use crate::engine::precision;
use crate::interfaces::RoundingPolicy;
use crate::numeric::NumericResult;
use crate::text::{self, FormattedDecimal, NumericLocale};

/// A decimal stored as `value × 10^precision` in an i64.
///
/// The multiply-divide engine, precision conversion and the text codec are
/// written once against this trait and reused by [`FixedDecimal`] and
/// [`DynDecimal`], and by the mixed-precision operators between them.
///
/// [`FixedDecimal`]: crate::numeric::FixedDecimal
/// [`DynDecimal`]: crate::numeric::DynDecimal
pub trait ScaledValue {
    /// Rounding applied whenever this value is narrowed
    type Rounding: RoundingPolicy;

    /// The scaled integer (`getUnbiased`)
    fn raw_value(&self) -> i64;

    /// Digits after the decimal point, always in `0..=18`
    fn precision(&self) -> u8;

    /// `10^precision`
    #[inline]
    fn scale_factor(&self) -> i64 {
        precision::factor(self.precision())
    }

    /// The raw value re-expressed at another precision.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `target > 18`
    /// - `Overflow`/`Underflow` if widening leaves the i64 range
    fn rescaled_raw(&self, target: u8) -> NumericResult<i64> {
        precision::convert::<Self::Rounding>(self.raw_value(), self.precision(), target)
    }

    /// Canonical mantissa/exponent form.
    fn to_mantissa_exponent(&self) -> MantissaExponent {
        exponent::unpack(self.raw_value(), self.precision())
    }

    /// Approximate value as a double.
    fn to_f64(&self) -> f64 {
        self.raw_value() as f64 / self.scale_factor() as f64
    }

    /// -1, 0 or +1
    fn signum(&self) -> i32 {
        self.raw_value().signum() as i32
    }

    /// Fixed-point text using the locale's decimal point.
    fn format_with(&self, locale: &NumericLocale) -> FormattedDecimal {
        text::format_scaled(self.raw_value(), self.precision(), locale)
    }
}
