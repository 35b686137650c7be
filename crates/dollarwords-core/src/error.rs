//! # Error Types
//!
//! Error types for dollarwords-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dollarwords-core errors (this file)                                   │
//! │  ├── CoreError        - The single failure kind: InvalidInput          │
//! │  └── ValidationError  - Why the input was rejected                     │
//! │                                                                         │
//! │  apps/api errors (separate crate)                                      │
//! │  └── ApiError         - What the HTTP caller sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → 400 JSON body          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers branch on success vs. failure only. The reason is carried for
//! display, never for control flow.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Conversion errors.
///
/// There is exactly one kind of failure. The wrapped [`ValidationError`]
/// says which check rejected the input; `Display` prints only that reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input string is not an acceptable amount.
    #[error("{0}")]
    InvalidInput(#[from] ValidationError),
}

impl CoreError {
    /// Returns the validation reason behind this error.
    pub fn reason(&self) -> &ValidationError {
        match self {
            CoreError::InvalidInput(reason) => reason,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures.
///
/// All validation runs eagerly before any word is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only input.
    #[error("Input cannot be null or empty")]
    Required,

    /// Not a decimal numeral in the invariant format.
    #[error("Invalid number format")]
    InvalidFormat,

    /// A nonzero amount with a leading minus sign.
    #[error("Negative numbers are not supported")]
    Negative,

    /// Above the largest renderable amount.
    #[error("Number too large (maximum {max})")]
    TooLarge { max: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
