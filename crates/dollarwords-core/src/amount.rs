//! # Amount Module
//!
//! Provides the `Amount` type: a validated, non-negative monetary value.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  999999999999.99 as f64 = 999999999999.9899902...  ❌ cents are gone   │
//! │                                                                         │
//! │  OUR SOLUTION: parse the digit strings, keep integer cents              │
//! │    "123.45" → integer "123", fraction "45" → 12345 cents               │
//! │    Every amount up to the ceiling is exact in a u64                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dollarwords_core::Amount;
//!
//! let amount = Amount::parse("123.45").unwrap();
//! assert_eq!(amount.dollars(), 123);
//! assert_eq!(amount.cents_part(), 45);
//!
//! // One fractional digit means tenths: ".5" is fifty cents
//! assert_eq!(Amount::parse(".5").unwrap().cents_part(), 50);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::{scan_numeral, ValidationResult};
use crate::{MAX_AMOUNT_CENTS, MAX_WHOLE_DOLLARS};

/// Digits in [`MAX_WHOLE_DOLLARS`]; any integer part with fewer significant
/// digits is in range.
const MAX_WHOLE_DIGITS: usize = 12;

/// How the ceiling is spelled in error messages.
const MAX_AMOUNT_DISPLAY: &str = "999,999,999,999.99";

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in cents, always within `0..=MAX_AMOUNT_CENTS`.
///
/// Digits beyond the second fractional place are dropped during parsing
/// (truncated, not rounded), so "1.999" holds 199 cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    /// The largest accepted amount ($999,999,999,999.99).
    pub const MAX: Amount = Amount(MAX_AMOUNT_CENTS);

    /// Creates an amount from cents.
    ///
    /// Returns `None` above [`Amount::MAX`].
    ///
    /// ## Example
    /// ```rust
    /// use dollarwords_core::Amount;
    ///
    /// let amount = Amount::from_cents(1099).unwrap(); // $10.99
    /// assert_eq!(amount.dollars(), 10);
    /// assert!(Amount::from_cents(u64::MAX).is_none());
    /// ```
    pub const fn from_cents(cents: u64) -> Option<Self> {
        if cents > MAX_AMOUNT_CENTS {
            None
        } else {
            Some(Amount(cents))
        }
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the whole-dollar part.
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Returns the cents part (0-99).
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses an invariant-format decimal string.
    ///
    /// ## Validation Order
    /// ```text
    /// input ──► empty? ──────────────► Required
    ///   │
    ///   ▼
    /// grammar ok? ──────────────────► InvalidFormat
    ///   │
    ///   ▼
    /// every digit 0? ───────────────► Ok(zero)     ("-0" is zero, not negative)
    ///   │
    ///   ▼
    /// '-' sign (either end)? ───────► Negative
    ///   │
    ///   ▼
    /// above 999,999,999,999.99? ────► TooLarge
    ///   │
    ///   ▼
    /// Ok(amount)
    /// ```
    ///
    /// An integer part with more than 12 significant digits is `TooLarge`
    /// however long it is. Digit strings are never converted to a
    /// fixed-width decimal, so there is no separate overflow case reported
    /// as `InvalidFormat`.
    pub fn parse(input: &str) -> ValidationResult<Self> {
        let numeral = scan_numeral(input)?;

        if numeral.is_zero() {
            return Ok(Amount::zero());
        }

        if numeral.is_negative() {
            return Err(ValidationError::Negative);
        }

        let integer = numeral.integer_digits().trim_start_matches('0');
        if integer.len() > MAX_WHOLE_DIGITS {
            return Err(too_large());
        }

        let dollars: u64 = if integer.is_empty() {
            0
        } else {
            integer
                .parse()
                .map_err(|_| ValidationError::InvalidFormat)?
        };

        let fraction = numeral.fraction_digits();
        let (kept, dropped) = fraction.split_at(fraction.len().min(2));
        let cents = parse_cents(kept)?;

        // Only the dropped digits can push the very top amount over the ceiling
        if dollars == MAX_WHOLE_DOLLARS
            && cents == 99
            && dropped.bytes().any(|b| b != b'0')
        {
            return Err(too_large());
        }

        Ok(Amount(dollars * 100 + cents))
    }
}

/// Reads up to two fraction digits as cents, right-padding with zero.
fn parse_cents(digits: &str) -> ValidationResult<u64> {
    match digits.len() {
        0 => Ok(0),
        1 => digits
            .parse::<u64>()
            .map(|tenths| tenths * 10)
            .map_err(|_| ValidationError::InvalidFormat),
        _ => digits.parse().map_err(|_| ValidationError::InvalidFormat),
    }
}

fn too_large() -> ValidationError {
    ValidationError::TooLarge {
        max: MAX_AMOUNT_DISPLAY,
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::parse(s)
    }
}

/// Shows the amount as `$<dollars>.<cents>` for logs and debugging.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
