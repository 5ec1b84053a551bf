/// Response helpers shared by all route handlers
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// 200 response with a JSON body
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Error response with the standard envelope
///
/// Only a short human-readable string leaves the process; internals and
/// stack traces stay in the logs.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    let body = serde_json::json!({
        "ok": false,
        "code": code,
        "error": message,
    });
    (status, Json(body)).into_response()
}
