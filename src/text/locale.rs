// ============================================================================
// Numeric Locale
// Decimal-point and digit-grouping characters for text conversion
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Punctuation used when reading and writing decimal text.
///
/// The formatter only uses `decimal_point`; the parser also skips
/// `thousands_separator` inside the integer part when `grouping` is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericLocale {
    pub decimal_point: char,
    pub thousands_separator: char,
    pub grouping: bool,
}

impl NumericLocale {
    /// The "C" locale: `.` decimal point, no grouping
    pub const C: Self = Self {
        decimal_point: '.',
        thousands_separator: ',',
        grouping: false,
    };

    /// Locale with the given decimal point and no grouping.
    pub const fn new(decimal_point: char) -> Self {
        Self {
            decimal_point,
            thousands_separator: ',',
            grouping: false,
        }
    }

    /// Enable digit grouping with the given separator.
    pub const fn with_grouping(mut self, thousands_separator: char) -> Self {
        self.thousands_separator = thousands_separator;
        self.grouping = true;
        self
    }

    /// Check that the punctuation cannot be confused with number syntax.
    ///
    /// # Errors
    /// Returns `InvalidInput` if a character is a digit or sign, or if the
    /// grouping separator equals the decimal point.
    pub fn validate(&self) -> NumericResult<()> {
        let reserved = |c: char| c.is_ascii_digit() || c == '-' || c == '+';

        if reserved(self.decimal_point) {
            return Err(NumericError::InvalidInput);
        }
        if self.grouping
            && (reserved(self.thousands_separator)
                || self.thousands_separator == self.decimal_point)
        {
            return Err(NumericError::InvalidInput);
        }
        Ok(())
    }
}

impl Default for NumericLocale {
    fn default() -> Self {
        Self::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_c_locale() {
        let locale = NumericLocale::default();
        assert_eq!(locale.decimal_point, '.');
        assert!(!locale.grouping);
        assert!(locale.validate().is_ok());
    }

    #[test]
    fn test_grouping_locale() {
        let de = NumericLocale::new(',').with_grouping('.');
        assert!(de.grouping);
        assert_eq!(de.thousands_separator, '.');
        assert!(de.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ambiguous_punctuation() {
        assert_eq!(
            NumericLocale::new('5').validate(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            NumericLocale::new('.').with_grouping('.').validate(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            NumericLocale::new(',').with_grouping('-').validate(),
            Err(NumericError::InvalidInput)
        );
    }
}
