//! Shared response envelope for API handlers.
//!
//! Every response body is `{ "data": ..., "errors": [...] }`. Successful
//! responses carry an empty `errors` list; failures carry `data: null`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub errors: Vec<ErrorBody>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<ErrorBody>) -> Self {
        Self { data: None, errors }
    }
}

/// Handler return shorthand: `Ok(ok(payload))`.
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}
