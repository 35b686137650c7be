//! # Converter Module
//!
//! `NumberWordsConverter` ties parsing and rendering together.
//!
//! ## Phrase Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dollars │ cents │ result                                               │
//! │  ────────┼───────┼─────────────────────────────────────────────────     │
//! │     0    │   0   │ "ZERO DOLLARS"                                       │
//! │    >0    │   0   │ "<dollars> DOLLAR[S]"                                │
//! │     0    │  >0   │ "<cents> CENT[S]"                                    │
//! │    >0    │  >0   │ "<dollars> DOLLAR[S] AND <cents> CENT[S]"            │
//! │                                                                         │
//! │  Suffix "S" unless the count is exactly 1.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::amount::Amount;
use crate::error::CoreResult;
use crate::words::whole_number_to_words;
use crate::ZERO_PHRASE;

/// Converts amount strings to English words.
///
/// Stateless: one value can serve any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberWordsConverter;

impl NumberWordsConverter {
    /// Creates a converter.
    pub const fn new() -> Self {
        NumberWordsConverter
    }

    /// Validates `input` and renders it as words.
    ///
    /// ## Errors
    /// [`crate::CoreError::InvalidInput`] when the input is empty, malformed,
    /// negative, or above $999,999,999,999.99. Nothing is rendered on failure.
    ///
    /// ## Example
    /// ```rust
    /// use dollarwords_core::NumberWordsConverter;
    ///
    /// let converter = NumberWordsConverter::new();
    /// assert_eq!(converter.convert(".50").unwrap(), "FIFTY CENTS");
    /// assert_eq!(converter.convert("1").unwrap(), "ONE DOLLAR");
    /// ```
    pub fn convert(&self, input: &str) -> CoreResult<String> {
        let amount = Amount::parse(input)?;
        Ok(self.render(amount))
    }

    /// Renders an already-validated amount.
    pub fn render(&self, amount: Amount) -> String {
        match (amount.dollars(), amount.cents_part()) {
            (0, 0) => ZERO_PHRASE.to_string(),
            (dollars, 0) => clause(dollars, "DOLLAR"),
            (0, cents) => clause(cents, "CENT"),
            (dollars, cents) => format!(
                "{} AND {}",
                clause(dollars, "DOLLAR"),
                clause(cents, "CENT")
            ),
        }
    }
}

/// Converts with a default [`NumberWordsConverter`].
pub fn convert(input: &str) -> CoreResult<String> {
    NumberWordsConverter::new().convert(input)
}

/// "<count in words> <unit>", pluralized unless `count` is 1.
fn clause(count: u64, unit: &str) -> String {
    let mut words = whole_number_to_words(count);
    words.push(' ');
    words.push_str(unit);
    if count != 1 {
        words.push('S');
    }
    words
}

// =============================================================================
// Unit Tests
// =============================================================================
