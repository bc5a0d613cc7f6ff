// ============================================================================
// Engine Module
// Contains the numeric core: rounding, multiply-divide, rescaling
// ============================================================================

pub mod exponent;
pub mod mul_div;
pub mod precision;
pub mod rounding;

pub use exponent::MantissaExponent;
pub use mul_div::{mul_div, Outcome};
pub use precision::{convert, precision_factor, MAX_PRECISION, PRECISION_FACTORS};
pub use rounding::{AwayFromZero, Ceiling, Floor, HalfDown, HalfEven, HalfUp, Nearest, Truncate};
