// ============================================================================
// Decimal Configuration
// Runtime precision and locale for building and rendering decimals
// ============================================================================

use crate::engine::precision;
use crate::interfaces::{MixingMode, RoundingPolicy, ScaledValue};
use crate::numeric::{DynDecimal, NumericError, NumericResult};
use crate::text::{self, FormattedDecimal, NumericLocale};
use std::io::Read;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision and punctuation for decimals whose precision is only known
/// at runtime, e.g. per currency or per instrument.
///
/// Rounding and mixing rules stay type parameters of the produced
/// [`DynDecimal`]; they are chosen by the caller's type annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalConfig {
    /// Digits after the decimal point (0-18)
    pub precision: u8,

    /// Decimal point and digit grouping used for text
    pub locale: NumericLocale,
}

impl DecimalConfig {
    /// Create a configuration in the "C" locale
    pub fn new(precision: u8) -> Self {
        Self {
            precision,
            locale: NumericLocale::C,
        }
    }

    /// Builder method: Set the locale
    pub fn with_locale(mut self, locale: NumericLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `InvalidInput` if the locale punctuation is ambiguous
    pub fn validate(&self) -> NumericResult<()> {
        precision::validate(self.precision)?;
        self.locale.validate()
    }

    /// Zero at the configured precision.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` if `precision > 18`.
    pub fn zero<R: RoundingPolicy, M: MixingMode>(&self) -> NumericResult<DynDecimal<R, M>> {
        DynDecimal::zero(self.precision)
    }

    /// An integer at the configured precision.
    ///
    /// # Errors
    /// See [`DynDecimal::from_integer`].
    pub fn from_integer<R: RoundingPolicy, M: MixingMode>(
        &self,
        value: i64,
    ) -> NumericResult<DynDecimal<R, M>> {
        DynDecimal::from_integer(value, self.precision)
    }

    /// Parse text in the configured locale at the configured precision.
    ///
    /// # Errors
    /// See [`DynDecimal::parse_with`].
    pub fn parse<R: RoundingPolicy, M: MixingMode>(&self, s: &str) -> NumericResult<DynDecimal<R, M>> {
        DynDecimal::parse_with(s, self.precision, &self.locale)
    }

    /// Read one number from a byte stream.
    ///
    /// # Errors
    /// See [`DynDecimal::read_from`].
    pub fn read<R: RoundingPolicy, M: MixingMode>(
        &self,
        reader: impl Read,
    ) -> NumericResult<DynDecimal<R, M>> {
        DynDecimal::read_from(reader, self.precision, &self.locale)
    }

    /// Render any decimal at the configured precision and locale.
    ///
    /// The value is rescaled first, rounding through its own policy.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if widening leaves the i64 range
    pub fn format<S: ScaledValue>(&self, value: &S) -> NumericResult<FormattedDecimal> {
        let raw = value.rescaled_raw(self.precision)?;
        Ok(text::format_scaled(raw, self.precision, &self.locale))
    }
}

impl Default for DecimalConfig {
    /// Nine decimal places, "C" locale
    fn default() -> Self {
        Self::new(9)
    }
}

impl TryFrom<StoredConfig> for DecimalConfig {
    type Error = NumericError;

    fn try_from(stored: StoredConfig) -> NumericResult<Self> {
        let config = Self::new(stored.precision).with_locale(stored.locale);
        config.validate()?;
        Ok(config)
    }
}

/// Unvalidated configuration as read from an external source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredConfig {
    pub precision: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locale: NumericLocale,
}
