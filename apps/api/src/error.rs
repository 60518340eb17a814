//! Error types for the HTTP API.
//!
//! Every failure is answered in plain text. Storage faults carry no detail
//! to the client; the cause goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pasteleria_core::AuthError;
use pasteleria_db::DbError;

/// Body sent for storage faults outside `/login`.
const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(err) if err.is_rejection() => StatusCode::UNAUTHORIZED,
            ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Storage fault");
                INTERNAL_ERROR_BODY.to_string()
            }
            ApiError::Auth(AuthError::Internal(cause)) => {
                tracing::error!(%cause, "Login failed");
                self.to_string()
            }
            ApiError::Auth(err) => err.to_string(),
        };

        (status, body).into_response()
    }
}
