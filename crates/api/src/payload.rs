//! Request body decoding.
//!
//! Bodies are read as raw bytes and decoded with `serde_json` regardless of
//! the `Content-Type` header, so every decode or validation failure can be
//! reported with the calling route's own fixed message.

use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Decode and validate a JSON body, mapping any failure to a 400 carrying
/// `message`.
pub fn decode_payload<T>(body: &[u8], message: &str) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "Rejected undecodable request payload");
        AppError::BadRequest(message.to_string())
    })?;

    value.validate().map_err(|err| {
        tracing::debug!(error = %err, "Rejected invalid request payload");
        AppError::BadRequest(message.to_string())
    })?;

    Ok(value)
}
