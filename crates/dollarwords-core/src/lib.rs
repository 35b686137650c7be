//! # dollarwords-core: Amount-to-Words Conversion
//!
//! This crate is the **heart** of dollarwords. It turns a decimal amount
//! string into English words, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      dollarwords Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web form (static/index.html)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /api/numbertowords/convert        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/api (axum)                              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ dollarwords-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation │─►│  amount   │─►│ converter │─►│   words   │  │   │
//! │  │   │  grammar   │  │  Amount   │  │  clauses  │  │  tables   │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`amount`] - `Amount` type held as integer cents (no floating point!)
//! - [`validation`] - Invariant numeral grammar
//! - `words` - Lookup tables and the chunk/scale renderers (crate-private)
//! - [`converter`] - `NumberWordsConverter`, the public entry point
//! - [`types`] - Request/response DTOs shared with the web form
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use dollarwords_core::NumberWordsConverter;
//!
//! let converter = NumberWordsConverter::new();
//! let words = converter.convert("123.45").unwrap();
//! assert_eq!(
//!     words,
//!     "ONE HUNDRED AND TWENTY-THREE DOLLARS AND FORTY-FIVE CENTS"
//! );
//!
//! assert!(converter.convert("-1").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod converter;
pub mod error;
pub mod types;
pub mod validation;
mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::Amount;
pub use converter::{convert, NumberWordsConverter};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{ConversionRequest, ConversionResponse};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest whole-dollar part that can be rendered.
///
/// Four 3-digit groups: the top group is BILLION. TRILLION exists in the
/// scale table but is never reached by a valid amount.
pub const MAX_WHOLE_DOLLARS: u64 = 999_999_999_999;

/// Largest amount accepted, in cents ($999,999,999,999.99).
pub const MAX_AMOUNT_CENTS: u64 = MAX_WHOLE_DOLLARS * 100 + 99;

/// Phrase returned for any zero amount.
pub const ZERO_PHRASE: &str = "ZERO DOLLARS";
