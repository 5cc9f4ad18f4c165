//! The single path every handler uses to write a JSON response.
//!
//! Successful payloads are written bare (a record or an array of records),
//! failures use the `{"error": "..."}` envelope in [`ErrorBody`].

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `payload` and write it with `status` and a JSON content type.
///
/// Encoding is best-effort: if serialization fails the failure is logged and
/// an empty body goes out with the intended status.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    let body = match serde_json::to_vec(payload) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, %status, "Failed to encode response body");
            Vec::new()
        }
    };

    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn sets_status_and_content_type() {
        let response = json_response(StatusCode::CREATED, &ErrorBody { error: "x".into() });
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn encoding_failure_keeps_status() {
        // JSON object keys must be strings; tuple keys cannot be encoded.
        let mut unencodable = BTreeMap::new();
        unencodable.insert((1, 2), "v");

        let response = json_response(StatusCode::OK, &unencodable);
        assert_eq!(response.status(), StatusCode::OK);
    }
}
