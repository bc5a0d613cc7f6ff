// ============================================================================
// Text Module
// Decimal text parsing and formatting
// ============================================================================

mod formatter;
mod locale;
mod parser;

pub use formatter::{format_scaled, split_raw, write_scaled, FormattedDecimal, FORMAT_CAPACITY};
pub use locale::NumericLocale;
pub use parser::{parse_chars, ParsedText};
