// ============================================================================
// Rounding Policy Interface
// Defines the contract for pluggable rounding rules
// ============================================================================

use crate::engine::rounding;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy pattern interface for rounding.
/// Implementations: Nearest (default), Truncate, HalfDown, HalfUp, HalfEven,
/// Ceiling, Floor, AwayFromZero.
///
/// Policies are zero-sized and selected through a type parameter, so every
/// method is an associated function.
pub trait RoundingPolicy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Runtime identity of the policy, for logging and configuration
    const MODE: RoundingMode;

    /// Tie-breaking strategy for a real value of the given sign.
    fn strategy(negative: bool) -> RoundingStrategy;

    /// Round a real quantity to an integer.
    ///
    /// Returns `None` when the rounded value does not fit in an i64.
    fn round(value: Decimal) -> Option<i64> {
        value
            .round_dp_with_strategy(0, Self::strategy(value.is_sign_negative()))
            .to_i64()
    }

    /// Compute `round(a / b)` in integer arithmetic.
    ///
    /// Returns `None` if applying the rounding correction would leave the
    /// i64 range, or if `b == 0`. Callers fall back to the wider
    /// multiply-divide path instead of accepting a wrapped quotient.
    fn div_rounded(a: i64, b: i64) -> Option<i64>;
}

/// Names every rounding policy; dispatches to it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Half away from zero
    #[default]
    Nearest,
    /// Toward zero, no rounding
    Truncate,
    /// Half toward negative infinity
    HalfDown,
    /// Half toward positive infinity
    HalfUp,
    /// Half to even (banker's rounding)
    HalfEven,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
    /// Any fraction away from zero
    AwayFromZero,
}

impl RoundingMode {
    /// All modes, in declaration order
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Nearest,
        RoundingMode::Truncate,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::AwayFromZero,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoundingMode::Nearest => "nearest",
            RoundingMode::Truncate => "truncate",
            RoundingMode::HalfDown => "half-down",
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
            RoundingMode::Ceiling => "ceiling",
            RoundingMode::Floor => "floor",
            RoundingMode::AwayFromZero => "away-from-zero",
        }
    }

    /// `round(a / b)` under this mode.
    pub fn div_rounded(self, a: i64, b: i64) -> Option<i64> {
        match self {
            RoundingMode::Nearest => rounding::Nearest::div_rounded(a, b),
            RoundingMode::Truncate => rounding::Truncate::div_rounded(a, b),
            RoundingMode::HalfDown => rounding::HalfDown::div_rounded(a, b),
            RoundingMode::HalfUp => rounding::HalfUp::div_rounded(a, b),
            RoundingMode::HalfEven => rounding::HalfEven::div_rounded(a, b),
            RoundingMode::Ceiling => rounding::Ceiling::div_rounded(a, b),
            RoundingMode::Floor => rounding::Floor::div_rounded(a, b),
            RoundingMode::AwayFromZero => rounding::AwayFromZero::div_rounded(a, b),
        }
    }

    /// Round a real value under this mode.
    pub fn round(self, value: Decimal) -> Option<i64> {
        match self {
            RoundingMode::Nearest => rounding::Nearest::round(value),
            RoundingMode::Truncate => rounding::Truncate::round(value),
            RoundingMode::HalfDown => rounding::HalfDown::round(value),
            RoundingMode::HalfUp => rounding::HalfUp::round(value),
            RoundingMode::HalfEven => rounding::HalfEven::round(value),
            RoundingMode::Ceiling => rounding::Ceiling::round(value),
            RoundingMode::Floor => rounding::Floor::round(value),
            RoundingMode::AwayFromZero => rounding::AwayFromZero::round(value),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
