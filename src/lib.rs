// ============================================================================
// Scaled Decimal Library
// Fixed-point decimal arithmetic on 64-bit scaled integers
// ============================================================================

//! # Scaled Decimal
//!
//! Exact, currency-grade decimal arithmetic on a single `i64` holding
//! `value × 10^precision`.
//!
//! ## Features
//!
//! - **Two precision models**: [`FixedDecimal<D>`](numeric::FixedDecimal)
//!   fixes the precision in the type, [`DynDecimal`](numeric::DynDecimal)
//!   carries it per value
//! - **Pluggable rounding** (half away from zero, half-even, floor, ...)
//!   selected through a type parameter
//! - **Overflow-safe multiply-divide**: `a * b / c` never overflows on the
//!   intermediate product; the rare lossy fallback is reported
//! - **Mantissa/exponent interchange** and locale-aware text parsing
//!
//! ## Example
//!
//! ```rust
//! use scaled_decimal::prelude::*;
//!
//! let ten = Money::from_integer(10).unwrap();
//! let three = Money::from_integer(3).unwrap();
//! assert_eq!((ten / three).to_string(), "3.33");
//!
//! // Banker's rounding on the same arithmetic
//! let cost: FixedDecimal<2, HalfEven> = "0.125".parse().unwrap();
//! assert_eq!(cost.to_string(), "0.12");
//!
//! // Precision chosen at runtime
//! let rate: DynDecimal = "1.0825".parse().unwrap();
//! let base: DynDecimal = DynDecimal::from_integer(20, 2).unwrap();
//! let taxed = base * rate;
//! assert_eq!(taxed.to_string(), "21.65");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod text;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::DecimalConfig;
    pub use crate::engine::{
        mul_div, AwayFromZero, Ceiling, Floor, HalfDown, HalfEven, HalfUp, MantissaExponent,
        Nearest, Outcome, Truncate,
    };
    pub use crate::interfaces::{
        AutoRound, LowerOrEqual, MixingMode, PrecisionMixing, RoundingMode, RoundingPolicy,
        SamePrecision, ScaledValue,
    };
    pub use crate::numeric::{
        DynDecimal, FixedDecimal, Money, NumericError, NumericResult, ParseError, Ratio,
        StoredDecimal,
    };
    pub use crate::text::NumericLocale;
}
