// ============================================================================
// Decimal Text Formatter
// Fixed-point rendering of scaled raw values into a stack buffer
// ============================================================================

use super::NumericLocale;
use crate::engine::precision::factor;
use arrayvec::ArrayString;
use std::fmt::{self, Write};

/// Sign, 19 integer digits, a decimal point of up to 4 bytes and 18
/// fraction digits all fit.
pub const FORMAT_CAPACITY: usize = 48;

/// Formatted decimal text, held on the stack
pub type FormattedDecimal = ArrayString<FORMAT_CAPACITY>;

/// Split `raw` into its integer part and the remainder below it.
///
/// Both parts carry the sign of `raw`. `precision` must be in `0..=18`.
#[inline]
pub fn split_raw(raw: i64, precision: u8) -> (i64, i64) {
    let f = factor(precision);
    let after = raw % f;
    ((raw - after) / f, after)
}

/// Write `raw` at `precision` as plain fixed-point text.
///
/// Negative values get a leading `-`, including those whose integer part is
/// zero. Exactly `precision` fraction digits are written; precision 0 writes
/// no decimal point.
pub fn write_scaled<W: Write>(
    out: &mut W,
    raw: i64,
    precision: u8,
    locale: &NumericLocale,
) -> fmt::Result {
    let (before, after) = split_raw(raw, precision);

    if raw < 0 {
        out.write_char('-')?;
    }
    write!(out, "{}", before.unsigned_abs())?;

    if precision > 0 {
        out.write_char(locale.decimal_point)?;
        write!(
            out,
            "{:0width$}",
            after.unsigned_abs(),
            width = usize::from(precision)
        )?;
    }
    Ok(())
}

/// Render `raw` at `precision` into a [`FormattedDecimal`].
pub fn format_scaled(raw: i64, precision: u8, locale: &NumericLocale) -> FormattedDecimal {
    let mut buf = FormattedDecimal::new();
    let written = write_scaled(&mut buf, raw, precision, locale);
    debug_assert!(written.is_ok(), "format capacity exceeded");
    buf
}
