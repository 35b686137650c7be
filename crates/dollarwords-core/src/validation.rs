//! # Validation Module
//!
//! Scans an input string against the invariant numeral grammar.
//!
//! ## Accepted Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input   := ws* sign? number ws*           (leading sign)              │
//! │           | ws* number ws* sign ws*        (trailing sign)             │
//! │  number  := integer? ('.' digits?)?                                     │
//! │  sign    := '+' | '-'                                                   │
//! │  integer := digit (digit | ',')*      ',' = thousands separator        │
//! │  digits  := digit+                                                      │
//! │                                                                         │
//! │  "123.45"   ✅     ".50"    ✅     "1,234"  ✅     "+7."   ✅           │
//! │  "5+"       ✅     "5-"     ✅     "0-"     ✅     "12.50 -" ✅         │
//! │  "abc"      ❌     "."      ❌     "1e5"    ❌     "$5"    ❌           │
//! │  "1.2.3"    ❌     ",5"     ❌     "-5-"    ❌     "1 000" ❌           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The grammar never depends on the process locale: `.` is always the
//! decimal point and `,` always a group separator.
//!
//! ## Usage
//! ```rust
//! use dollarwords_core::validation::scan_numeral;
//!
//! let numeral = scan_numeral("1,234.5").unwrap();
//! assert_eq!(numeral.integer_digits(), "1234");
//! assert_eq!(numeral.fraction_digits(), "5");
//! assert!(!numeral.is_negative());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeral
// =============================================================================

/// A syntactically valid numeral, split into its parts.
///
/// Digit strings are kept as text so that range checks never go through
/// floating point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral<'a> {
    negative: bool,
    integer: String,
    fraction: &'a str,
}

impl<'a> Numeral<'a> {
    /// True when a `-` sign was present, leading or trailing.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits with group separators removed. May be empty (".5").
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Every digit after the decimal point. May be empty ("5", "5.").
    pub fn fraction_digits(&self) -> &'a str {
        self.fraction
    }

    /// True when every digit is `0`, regardless of sign.
    pub fn is_zero(&self) -> bool {
        self.integer.bytes().all(|b| b == b'0') && self.fraction.bytes().all(|b| b == b'0')
    }
}

// =============================================================================
// Scanner
// =============================================================================

/// Checks `input` against the numeral grammar.
///
/// ## Errors
/// - [`ValidationError::Required`] for empty or whitespace-only input
/// - [`ValidationError::InvalidFormat`] for anything outside the grammar
///
/// Sign and range are NOT judged here; see [`crate::amount::Amount::parse`].
pub fn scan_numeral(input: &str) -> ValidationResult<Numeral<'_>> {
    let text = input.trim();

    if text.is_empty() {
        return Err(ValidationError::Required);
    }

    // At most one sign: leading, or else trailing (whitespace may precede it)
    let (negative, unsigned) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = text.strip_suffix('-') {
        (true, rest.trim_end())
    } else if let Some(rest) = text.strip_suffix('+') {
        (false, rest.trim_end())
    } else {
        (false, text)
    };

    let (integer_text, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    // A separator may follow digits but never lead the integer part
    if integer_text.starts_with(',') {
        return Err(ValidationError::InvalidFormat);
    }

    if !integer_text
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b',')
    {
        return Err(ValidationError::InvalidFormat);
    }

    // Also catches a second '.'
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }

    let integer: String = integer_text.chars().filter(|c| *c != ',').collect();

    if integer.is_empty() && fraction.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(Numeral {
        negative,
        integer,
        fraction,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_decimal_numerals() {
        let numeral = scan_numeral("123.45").unwrap();
        assert_eq!(numeral.integer_digits(), "123");
        assert_eq!(numeral.fraction_digits(), "45");
        assert!(!numeral.is_negative());

        let numeral = scan_numeral("50").unwrap();
        assert_eq!(numeral.integer_digits(), "50");
        assert_eq!(numeral.fraction_digits(), "");
    }

    #[test]
    fn test_leading_decimal_point() {
        let numeral = scan_numeral(".50").unwrap();
        assert_eq!(numeral.integer_digits(), "");
        assert_eq!(numeral.fraction_digits(), "50");
    }

    #[test]
    fn test_trailing_decimal_point() {
        let numeral = scan_numeral("7.").unwrap();
        assert_eq!(numeral.integer_digits(), "7");
        assert_eq!(numeral.fraction_digits(), "");
    }

    #[test]
    fn test_signs_and_whitespace() {
        let numeral = scan_numeral("  -123.45 ").unwrap();
        assert!(numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "123");

        let numeral = scan_numeral("+8").unwrap();
        assert!(!numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "8");
    }

    #[test]
    fn test_trailing_sign() {
        let numeral = scan_numeral("5+").unwrap();
        assert!(!numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "5");

        let numeral = scan_numeral("5-").unwrap();
        assert!(numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "5");

        let numeral = scan_numeral(" 12.50 - ").unwrap();
        assert!(numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "12");
        assert_eq!(numeral.fraction_digits(), "50");

        assert!(scan_numeral("0-").unwrap().is_zero());
    }

    #[test]
    fn test_thousands_separators_are_dropped() {
        let numeral = scan_numeral("1,234,567.89").unwrap();
        assert_eq!(numeral.integer_digits(), "1234567");
        assert_eq!(numeral.fraction_digits(), "89");
    }

    #[test]
    fn test_empty_input_is_required() {
        assert_eq!(scan_numeral(""), Err(ValidationError::Required));
        assert_eq!(scan_numeral("   \t\n"), Err(ValidationError::Required));
    }

    #[test]
    fn test_malformed_numerals() {
        for input in [
            "abc", ".", "-", "+", "-.", ".-", "1.2.3", ",5", "1e5", "$5", "-5-", "+5+",
            "-5+", "5--", "5 - 1", "1 000", "12a", "0x10", "--1", "+-1", "1.5,0", "(5)",
        ] {
            assert_eq!(
                scan_numeral(input),
                Err(ValidationError::InvalidFormat),
                "input {input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_zero_detection() {
        assert!(scan_numeral("0").unwrap().is_zero());
        assert!(scan_numeral("0.00").unwrap().is_zero());
        assert!(scan_numeral(".0").unwrap().is_zero());
        assert!(scan_numeral("-0").unwrap().is_zero());
        assert!(scan_numeral("000,000").unwrap().is_zero());
        assert!(!scan_numeral("0.001").unwrap().is_zero());
        assert!(!scan_numeral("10").unwrap().is_zero());
    }
}
