//! Conversion endpoint.
//!
//! ## Request Flow
//! ```text
//! POST /api/numbertowords/convert
//!      │
//!      ▼
//! body is a JSON object? ──── no ──► 400 "Invalid request body"
//!      │
//!      ▼
//! "number" present, non-blank? ── no ──► 400 "Number is required"
//!      │
//!      ▼
//! NumberWordsConverter::convert ── Err ──► 400 "<validation reason>"
//!      │
//!      ▼
//! 200 { "words": "...", "success": true }
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use dollarwords_core::{ConversionRequest, ConversionResponse};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::AppState;

/// `POST /api/numbertowords/convert`
pub async fn convert(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ConversionRequest>, JsonRejection>,
) -> Result<Json<ConversionResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "Rejected conversion request body");
        ApiError::bad_request("Invalid request body")
    })?;

    let number = request
        .number
        .as_deref()
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .ok_or_else(|| ApiError::bad_request("Number is required"))?;

    let words = state.converter.convert(number).map_err(|error| {
        warn!(%error, "Conversion rejected");
        ApiError::from(error)
    })?;

    debug!(input_len = number.len(), "Converted amount to words");
    Ok(Json(ConversionResponse::success(words)))
}
