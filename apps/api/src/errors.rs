use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::{ApiResponse, ErrorBody};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Database(e) => classify_sqlx_error(e),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Maps sqlx failures onto the HTTP taxonomy.
/// Row decode failures are mapping failures; unique violations are conflicts.
/// A foreign-key violation means the parent row vanished between lookup and
/// insert, so it reads as not found.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
            (StatusCode::NOT_FOUND, "NOT_FOUND")
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "MAPPING_ERROR")
        }
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            (StatusCode::CONFLICT, "CONFLICT")
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::NotFound(msg) | AppError::Validation(msg) | AppError::Conflict(msg) => {
                msg.clone()
            }
            AppError::Database(e) => match code {
                "NOT_FOUND" => "Resource not found".to_string(),
                "CONFLICT" => {
                    let constraint = match e {
                        sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("unknown"),
                        _ => "unknown",
                    };
                    format!("Duplicate value violates unique constraint: {constraint}")
                }
                "MAPPING_ERROR" => {
                    tracing::error!("Row mapping error: {e}");
                    "A record could not be mapped".to_string()
                }
                _ => {
                    tracing::error!("Database error: {e}");
                    "A database error occurred".to_string()
                }
            },
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body: ApiResponse<()> = ApiResponse::failure(vec![ErrorBody {
            code: code.to_string(),
            message,
        }]);

        (status, Json(body)).into_response()
    }
}
