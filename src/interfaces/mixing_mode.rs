// ============================================================================
// Mixing Mode Interface
// Strictness of arithmetic between operands of different precision
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strictness level for mixed-precision arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrecisionMixing {
    /// Both operands must share the same precision
    SamePrecision,
    /// The right operand may have lower or equal precision (never rounds)
    LowerOrEqual,
    /// Any combination; narrowing goes through the rounding policy
    #[default]
    AutoRound,
}

impl PrecisionMixing {
    /// Check whether an operand at `operand` precision may be combined into
    /// a value at `target` precision.
    ///
    /// # Errors
    /// Returns `ScaleMismatch` when this level forbids the combination.
    pub fn check(self, target: u8, operand: u8) -> NumericResult<()> {
        let allowed = match self {
            PrecisionMixing::SamePrecision => operand == target,
            PrecisionMixing::LowerOrEqual => operand <= target,
            PrecisionMixing::AutoRound => true,
        };

        if allowed {
            Ok(())
        } else {
            Err(NumericError::ScaleMismatch)
        }
    }
}

impl fmt::Display for PrecisionMixing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionMixing::SamePrecision => write!(f, "same-precision"),
            PrecisionMixing::LowerOrEqual => write!(f, "lower-or-equal"),
            PrecisionMixing::AutoRound => write!(f, "auto-round"),
        }
    }
}

/// Type-level selection of a [`PrecisionMixing`] level.
///
/// A decimal type family fixes its mode once, through a type parameter, so
/// separately compiled components cannot disagree about it.
pub trait MixingMode: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const MIXING: PrecisionMixing;

    #[inline]
    fn check(target: u8, operand: u8) -> NumericResult<()> {
        Self::MIXING.check(target, operand)
    }
}

/// Operands must share identical precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SamePrecision;

/// Operands of lower or equal precision combine without rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LowerOrEqual;

/// Any precision combination, rounding when narrowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AutoRound;

impl MixingMode for SamePrecision {
    const MIXING: PrecisionMixing = PrecisionMixing::SamePrecision;
}

impl MixingMode for LowerOrEqual {
    const MIXING: PrecisionMixing = PrecisionMixing::LowerOrEqual;
}

impl MixingMode for AutoRound {
    const MIXING: PrecisionMixing = PrecisionMixing::AutoRound;
}
