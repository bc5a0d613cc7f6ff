// ============================================================================
// Stored Decimal
// Canonical persistence form: the raw scaled integer with its precision
// ============================================================================

use super::errors::NumericResult;
use crate::engine::precision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `{ raw, precision }`, the only defined storage and wire layout.
///
/// Both decimal types serialize through this struct. The precision is not
/// validated until the value is turned back into a decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoredDecimal {
    pub raw: i64,
    pub precision: u8,
}

impl StoredDecimal {
    #[inline]
    pub const fn new(raw: i64, precision: u8) -> Self {
        Self { raw, precision }
    }

    /// Check the precision is inside `0..=18`.
    ///
    /// # Errors
    /// Returns `PrecisionOutOfRange` otherwise.
    #[inline]
    pub fn validate(&self) -> NumericResult<()> {
        precision::validate(self.precision).map(|_| ())
    }
}
