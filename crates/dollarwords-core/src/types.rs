//! # Transfer Types
//!
//! JSON bodies exchanged between the web form and the API.
//!
//! ```text
//! POST /api/numbertowords/convert
//!   ► { "number": "123.45" }                                  ConversionRequest
//!   ◄ { "words": "ONE HUNDRED ...", "success": true }          ConversionResponse
//!   ◄ { "words": "", "success": false, "errorMessage": "..." } ConversionResponse
//! ```
//!
//! Both types export TypeScript definitions via `ts-rs`, so the form's
//! types track these structs.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of a conversion request.
///
/// `number` is optional so that a missing or `null` field reaches the
/// handler and is reported as "required" instead of as a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversionRequest {
    pub number: Option<String>,
}

impl ConversionRequest {
    /// Creates a request for `number`.
    pub fn new(number: impl Into<String>) -> Self {
        ConversionRequest {
            number: Some(number.into()),
        }
    }
}

/// Body of every conversion response, success or failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConversionResponse {
    /// The amount in words; empty on failure.
    pub words: String,

    pub success: bool,

    /// Why the request failed; absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error_message: Option<String>,
}

impl ConversionResponse {
    /// A successful response carrying `words`.
    pub fn success(words: impl Into<String>) -> Self {
        ConversionResponse {
            words: words.into(),
            success: true,
            error_message: None,
        }
    }

    /// A failed response carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        ConversionResponse {
            words: String::new(),
            success: false,
            error_message: Some(message.into()),
        }
    }
}
