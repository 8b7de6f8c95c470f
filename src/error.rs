//! Application error type and its HTTP representation.
//!
//! Every fallible service and repository call returns [`AppError`]. Handlers
//! propagate it with `?` and Axum renders it through [`IntoResponse`] as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload under the `error` key of every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Upstream { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Returns true for the "absent row" outcome, as opposed to a failed query.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Unauthorized { .. } => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            AppError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
            AppError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::NotFound { message, details }
            | AppError::Conflict { message, details }
            | AppError::Upstream { message, details }
            | AppError::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %body.error.message, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
