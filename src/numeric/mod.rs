// ============================================================================
// Numeric Module
// Scaled-integer decimal types with pluggable rounding
// ============================================================================
//
// This module provides:
// - FixedDecimal<D, R, M>: decimal with compile-time precision
// - DynDecimal<R, M>: decimal carrying its precision at runtime
// - NumericError / ParseError: error types for arithmetic and parsing
// - StoredDecimal: the { raw, precision } persistence form
//
// Design principles:
// - Values are a single i64 holding value × 10^precision
// - Fallible operations return Result; operators panic like integer ops
// - Rounding policy and mixing mode are type parameters, never globals

/// Operator impl delegating to a checked method, panicking on error.
macro_rules! checked_operator {
    (impl[$($gen:tt)*] $op:ident::$method:ident($rhs:ty) for $lhs:ty => $checked:ident, $msg:literal) => {
        impl<$($gen)*> std::ops::$op<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn $method(self, rhs: $rhs) -> $lhs {
                self.$checked(rhs).expect($msg)
            }
        }
    };
}

/// Compound-assignment counterpart of `checked_operator!`.
macro_rules! checked_assign_operator {
    (impl[$($gen:tt)*] $op:ident::$method:ident($rhs:ty) for $lhs:ty => $checked:ident, $msg:literal) => {
        impl<$($gen)*> std::ops::$op<$rhs> for $lhs {
            #[inline]
            fn $method(&mut self, rhs: $rhs) {
                *self = self.$checked(rhs).expect($msg);
            }
        }
    };
}

mod arith;
mod dyn_decimal;
mod errors;
mod fixed_decimal;
mod stored;

pub use dyn_decimal::DynDecimal;
pub use errors::{NumericError, NumericResult, ParseError};
pub use fixed_decimal::{FixedDecimal, Money, Ratio};
pub use stored::StoredDecimal;
