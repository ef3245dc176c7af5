/*!
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. Error responses are JSON:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Body rejections from axum's `Json` extractor are folded into the same
 * shape through [`json_body`], so malformed input is a 400 like any other
 * validation failure.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if let BackendError::InternalError(source) = &self {
            tracing::error!("Internal error: {:?}", source);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Message for request bodies that are not valid JSON for the endpoint
pub const INVALID_BODY: &str = "Invalid request body";

/// Unwrap a JSON body, turning extractor rejections into validation errors
///
/// A request without a JSON content type is read as an empty object, so it
/// reaches the handler's own required-field check. Syntax errors and
/// wrong-typed fields become 400 [`INVALID_BODY`].
pub fn json_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, BackendError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            Err(BackendError::validation(INVALID_BODY))
        }
    }
}

/// Fallback handler for unknown routes
pub async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}
