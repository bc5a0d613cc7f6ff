// ============================================================================
// Decimal Text Parser
// Character state machine producing sign, integer and fractional digits
// ============================================================================

use super::NumericLocale;
use crate::engine::precision::{self, factor, MAX_PRECISION};
use crate::engine::rounding::div_rounded_carry;
use crate::interfaces::RoundingPolicy;
use crate::numeric::{NumericError, NumericResult, ParseError};
use std::io::Read;

/// Parser states, in the order a well-formed number visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Sign,
    BeforeFirstDigit,
    BeforeDecimal,
    AfterDecimal,
    End,
}

/// Decimal text broken into its parts, before packing into a precision.
///
/// For negative input both digit accumulators are already negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedText {
    pub negative: bool,
    pub integer_digits: i64,
    pub fractional_digits: i64,
    pub fractional_digit_count: u8,
}

impl ParsedText {
    /// Parse a string slice.
    ///
    /// Parsing stops without error at the first character that cannot
    /// continue the number, so `"12.5 USD"` reads as 12.5.
    pub fn parse(input: &str, locale: &NumericLocale) -> Result<Self, ParseError> {
        parse_chars(input.chars().map(Ok), locale)
    }

    /// Parse from a byte reader, one ASCII character at a time.
    ///
    /// The byte that ends the number is consumed. Read errors surface as
    /// [`ParseError::StreamFault`].
    pub fn read<R: Read>(reader: R, locale: &NumericLocale) -> Result<Self, ParseError> {
        let chars = reader
            .bytes()
            .map(|b| b.map(char::from).map_err(|_| ParseError::StreamFault));
        parse_chars(chars, locale)
    }

    /// Pack into a raw value at `precision`.
    ///
    /// Up to `precision` fractional digits combine exactly; further digits
    /// are rounded away through `R`.
    ///
    /// # Errors
    /// - `PrecisionOutOfRange` if `precision > 18`
    /// - `Overflow`/`Underflow` if the value does not fit at `precision`
    pub fn to_raw<R: RoundingPolicy>(&self, precision: u8) -> NumericResult<i64> {
        precision::validate(precision)?;

        let out_of_range = if self.negative {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        };
        let count = self.fractional_digit_count;

        if count <= precision {
            let fraction = self.fractional_digits * factor(precision - count);
            return self
                .integer_digits
                .checked_mul(factor(precision))
                .and_then(|whole| whole.checked_add(fraction))
                .ok_or(out_of_range);
        }

        let exact = self
            .integer_digits
            .checked_mul(factor(count))
            .and_then(|whole| whole.checked_add(self.fractional_digits));

        match exact {
            Some(raw) => precision::convert::<R>(raw, count, precision),
            None => {
                // The value at full parsed precision does not fit; round the
                // fractional digits on their own.
                let whole = self
                    .integer_digits
                    .checked_mul(factor(precision))
                    .ok_or(out_of_range)?;
                div_rounded_carry::<R>(whole, self.fractional_digits, factor(count - precision))
                    .ok_or(out_of_range)
            },
        }
    }
}

/// Append a digit to an accumulator that already carries the sign of the
/// number, so `i64::MIN` is reachable.
#[inline]
fn push_digit(acc: i64, digit: u32, negative: bool) -> Result<i64, ParseError> {
    let digit = i64::from(digit);
    let shifted = acc.checked_mul(10).ok_or(ParseError::Overflow)?;
    if negative {
        shifted.checked_sub(digit)
    } else {
        shifted.checked_add(digit)
    }
    .ok_or(ParseError::Overflow)
}

/// Run the state machine over a character source.
pub fn parse_chars<I>(input: I, locale: &NumericLocale) -> Result<ParsedText, ParseError>
where
    I: IntoIterator<Item = Result<char, ParseError>>,
{
    let mut state = State::Sign;
    let mut negative = false;
    let mut integer: i64 = 0;
    let mut fraction: i64 = 0;
    let mut fraction_count: u8 = 0;
    let mut digit_count: usize = 0;
    let mut chars = input.into_iter();

    while state != State::End {
        let Some(c) = chars.next() else {
            break;
        };
        let c = c?;

        match state {
            State::Sign => {
                if c == '-' {
                    negative = true;
                    state = State::BeforeFirstDigit;
                } else if c == '+' {
                    state = State::BeforeFirstDigit;
                } else if let Some(d) = c.to_digit(10) {
                    integer = push_digit(0, d, negative)?;
                    digit_count += 1;
                    state = State::BeforeDecimal;
                } else if c == locale.decimal_point {
                    state = State::AfterDecimal;
                } else if c != ' ' && c != '\t' {
                    return Err(ParseError::BadCharacter);
                }
            },
            State::BeforeFirstDigit => {
                if let Some(d) = c.to_digit(10) {
                    integer = push_digit(0, d, negative)?;
                    digit_count += 1;
                    state = State::BeforeDecimal;
                } else if c == locale.decimal_point {
                    state = State::AfterDecimal;
                } else {
                    return Err(ParseError::BadCharacter);
                }
            },
            State::BeforeDecimal => {
                if let Some(d) = c.to_digit(10) {
                    integer = push_digit(integer, d, negative)?;
                    digit_count += 1;
                } else if c == locale.decimal_point {
                    state = State::AfterDecimal;
                } else if locale.grouping && c == locale.thousands_separator {
                    // grouping separator
                } else {
                    state = State::End;
                }
            },
            State::AfterDecimal => {
                if let Some(d) = c.to_digit(10) {
                    fraction = push_digit(fraction, d, negative)?;
                    fraction_count += 1;
                    digit_count += 1;
                    if fraction_count >= MAX_PRECISION {
                        state = State::End;
                    }
                } else {
                    state = State::End;
                }
            },
            State::End => return Err(ParseError::InvalidState),
        }
    }

    if digit_count == 0 {
        return Err(ParseError::NoDigits);
    }

    Ok(ParsedText {
        negative,
        integer_digits: integer,
        fractional_digits: fraction,
        fractional_digit_count: fraction_count,
    })
}
