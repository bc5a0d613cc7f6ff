// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod mixing_mode;
mod rounding_policy;
mod scaled_value;

pub use mixing_mode::{AutoRound, LowerOrEqual, MixingMode, PrecisionMixing, SamePrecision};
pub use rounding_policy::{RoundingMode, RoundingPolicy};
pub use scaled_value::ScaledValue;
