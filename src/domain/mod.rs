// ============================================================================
// Domain Module
// Runtime configuration for decimals whose precision is data-driven
// ============================================================================

pub mod config;

pub use config::{DecimalConfig, StoredConfig};
