//! # Words Module
//!
//! Renders integers as upper-case English number words.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1,234,567                                                              │
//! │                                                                         │
//! │  567 (scale 0) → "FIVE HUNDRED AND SIXTY-SEVEN"                         │
//! │  234 (scale 1) → "TWO HUNDRED AND THIRTY-FOUR THOUSAND"                 │
//! │    1 (scale 2) → "ONE MILLION"                                          │
//! │                                                                         │
//! │  Peeled low → high, emitted high → low:                                 │
//! │  "ONE MILLION TWO HUNDRED AND THIRTY-FOUR THOUSAND                      │
//! │   FIVE HUNDRED AND SIXTY-SEVEN"                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "AND" only ever appears inside a chunk, between its hundreds and its
//! remainder; never between scale groups.

/// Words for 0-19. Index 0 is empty: zero is handled by callers.
const ONES: [&str; 20] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN", "NINETEEN",
];

/// Words for the tens digit, indices 2-9.
const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

/// Scale word per 3-digit group.
const SCALES: [&str; 5] = ["", "THOUSAND", "MILLION", "BILLION", "TRILLION"];

/// Renders a non-negative integer, grouped by powers of 1000.
///
/// Zero groups are skipped together with their scale word, so 1,000,000 is
/// "ONE MILLION". Returns an empty string for 0.
///
/// Callers pass validated amounts only: a whole part of at most
/// [`crate::MAX_WHOLE_DOLLARS`] or a cents part below 100.
pub(crate) fn whole_number_to_words(number: u64) -> String {
    debug_assert!(number <= crate::MAX_WHOLE_DOLLARS);

    let mut groups: Vec<String> = Vec::new();
    let mut remaining = number;
    let mut scale = 0;

    while remaining > 0 {
        let chunk = (remaining % 1000) as u16;
        if chunk != 0 {
            let mut words = chunk_to_words(chunk);
            if scale > 0 {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }

        remaining /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

/// Renders a 0-999 chunk: hundreds, then tens/ones.
///
/// ```text
///   7   → "SEVEN"
///  11   → "ELEVEN"                (teens come straight from the table)
///  21   → "TWENTY-ONE"
/// 300   → "THREE HUNDRED"
/// 305   → "THREE HUNDRED AND FIVE"
///   0   → ""
/// ```
pub(crate) fn chunk_to_words(number: u16) -> String {
    debug_assert!(number < 1000);

    let mut result = String::new();
    let hundreds = usize::from(number / 100);
    let remainder = usize::from(number % 100);

    if hundreds > 0 {
        result.push_str(ONES[hundreds]);
        result.push_str(" HUNDRED");
        if remainder > 0 {
            result.push_str(" AND ");
        }
    }

    if remainder >= 20 {
        result.push_str(TENS[remainder / 10]);
        let units = remainder % 10;
        if units > 0 {
            result.push('-');
            result.push_str(ONES[units]);
        }
    } else if remainder > 0 {
        result.push_str(ONES[remainder]);
    }

    result
}
