// ============================================================================
// Rounding Policies
// Stateless tie-breaking rules for real rounding and integer division
// ============================================================================

use crate::interfaces::{RoundingMode, RoundingPolicy};
use rust_decimal::RoundingStrategy;
use std::cmp::Ordering;

// ============================================================================
// Division Helpers
// ============================================================================

/// Truncated quotient together with what a policy needs to correct it.
#[derive(Debug, Clone, Copy)]
struct Split {
    truncated: i64,
    /// |a % b|
    remainder: u64,
    /// |b|
    divisor: u64,
    /// Sign of the exact quotient
    negative: bool,
}

impl Split {
    /// `None` for `b == 0` and for `i64::MIN / -1`.
    #[inline]
    fn of(a: i64, b: i64) -> Option<Self> {
        let truncated = a.checked_div(b)?;
        let remainder = a.checked_rem(b)?.unsigned_abs();
        Some(Self {
            truncated,
            remainder,
            divisor: b.unsigned_abs(),
            negative: (a < 0) != (b < 0),
        })
    }

    /// Position of the discarded fraction relative to one half.
    #[inline]
    fn half(&self) -> Ordering {
        self.remainder.cmp(&(self.divisor - self.remainder))
    }

    #[inline]
    fn is_exact(&self) -> bool {
        self.remainder == 0
    }

    /// Truncated quotient, moved one unit away from zero when `away` holds.
    ///
    /// A nonzero remainder implies `|b| >= 2`, so the step cannot overflow.
    #[inline]
    fn resolve(&self, away: bool) -> i64 {
        if !away || self.is_exact() {
            self.truncated
        } else if self.negative {
            self.truncated - 1
        } else {
            self.truncated + 1
        }
    }
}

/// Whether adding the `|b| / 2` correction to `a` stays inside the i64 range.
#[inline]
fn correction_fits(a: i64, b: i64) -> bool {
    let correction = (b.unsigned_abs() / 2) as i64;
    if a >= 0 {
        i64::MAX - a >= correction
    } else {
        i64::MIN - a <= -correction
    }
}

/// `round(whole + numerator / divisor)` as a single quotient.
///
/// `whole` and `numerator / divisor` must not have opposite signs. The parity
/// of `whole` is folded into the numerator so that ties resolve against the
/// complete quotient rather than the fraction alone.
pub(crate) fn div_rounded_carry<R: RoundingPolicy>(
    whole: i64,
    numerator: i64,
    divisor: i64,
) -> Option<i64> {
    let parity = whole % 2;
    let shifted = numerator.checked_add(parity.checked_mul(divisor)?)?;
    let fraction = R::div_rounded(shifted, divisor)?;
    (whole - parity).checked_add(fraction)
}

// ============================================================================
// Policies
// ============================================================================

/// Round half away from zero (the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nearest;

impl RoundingPolicy for Nearest {
    const MODE: RoundingMode = RoundingMode::Nearest;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::MidpointAwayFromZero
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        if !correction_fits(a, b) {
            return None;
        }
        let split = Split::of(a, b)?;
        Some(split.resolve(split.half() != Ordering::Less))
    }
}

/// No rounding: decimal places are stripped (round toward zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Truncate;

impl RoundingPolicy for Truncate {
    const MODE: RoundingMode = RoundingMode::Truncate;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::ToZero
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        a.checked_div(b)
    }
}

/// Round half toward negative infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfDown;

impl RoundingPolicy for HalfDown {
    const MODE: RoundingMode = RoundingMode::HalfDown;

    fn strategy(negative: bool) -> RoundingStrategy {
        if negative {
            RoundingStrategy::MidpointAwayFromZero
        } else {
            RoundingStrategy::MidpointTowardZero
        }
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        if !correction_fits(a, b) {
            return None;
        }
        let split = Split::of(a, b)?;
        let away = match split.half() {
            Ordering::Greater => true,
            Ordering::Equal => split.negative,
            Ordering::Less => false,
        };
        Some(split.resolve(away))
    }
}

/// Round half toward positive infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfUp;

impl RoundingPolicy for HalfUp {
    const MODE: RoundingMode = RoundingMode::HalfUp;

    fn strategy(negative: bool) -> RoundingStrategy {
        if negative {
            RoundingStrategy::MidpointTowardZero
        } else {
            RoundingStrategy::MidpointAwayFromZero
        }
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        if !correction_fits(a, b) {
            return None;
        }
        let split = Split::of(a, b)?;
        let away = match split.half() {
            Ordering::Greater => true,
            Ordering::Equal => !split.negative,
            Ordering::Less => false,
        };
        Some(split.resolve(away))
    }
}

/// Banker's rounding: half to the nearest even integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HalfEven;

impl RoundingPolicy for HalfEven {
    const MODE: RoundingMode = RoundingMode::HalfEven;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::MidpointNearestEven
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let split = Split::of(a, b)?;
        let away = match split.half() {
            Ordering::Greater => true,
            Ordering::Equal => split.truncated % 2 != 0,
            Ordering::Less => false,
        };
        Some(split.resolve(away))
    }
}

/// Always round toward positive infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ceiling;

impl RoundingPolicy for Ceiling {
    const MODE: RoundingMode = RoundingMode::Ceiling;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::ToPositiveInfinity
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let split = Split::of(a, b)?;
        Some(split.resolve(!split.negative))
    }
}

/// Always round toward negative infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Floor;

impl RoundingPolicy for Floor {
    const MODE: RoundingMode = RoundingMode::Floor;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::ToNegativeInfinity
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let split = Split::of(a, b)?;
        Some(split.resolve(split.negative))
    }
}

/// Any nonzero fraction rounds the magnitude up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AwayFromZero;

impl RoundingPolicy for AwayFromZero {
    const MODE: RoundingMode = RoundingMode::AwayFromZero;

    fn strategy(_negative: bool) -> RoundingStrategy {
        RoundingStrategy::AwayFromZero
    }

    fn div_rounded(a: i64, b: i64) -> Option<i64> {
        let split = Split::of(a, b)?;
        Some(split.resolve(true))
    }
}

// ============================================================================
// Tests
// ============================================================================
