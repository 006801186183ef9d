use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::infrastructure::commerce::CommerceApiError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// - `Validation` - malformed or incomplete input
/// - `Upstream` - a commerce API call failed (transport or non-2xx status)
/// - `Internal` - anything else
///
/// Webhook processing errors never reach the caller; the webhook handler logs
/// them and acknowledges regardless. The [`IntoResponse`] mapping serves the
/// remaining endpoints.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
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
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, details } => {
                write!(f, "validation error: {} ({})", message, details)
            }
            AppError::Upstream { message, details } => {
                write!(f, "upstream error: {} ({})", message, details)
            }
            AppError::Internal { message, details } => {
                write!(f, "internal error: {} ({})", message, details)
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Upstream { message, details } => {
                (StatusCode::BAD_GATEWAY, "upstream_error", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a commerce API client error into the application taxonomy.
pub fn map_commerce_error(operation: &str, e: CommerceApiError) -> AppError {
    match e {
        CommerceApiError::Status { status, body } => AppError::upstream(
            format!("Commerce API rejected {}", operation),
            json!({ "status": status, "body": body }),
        ),
        CommerceApiError::Transport(e) => AppError::upstream(
            format!("Commerce API transport failure during {}", operation),
            json!({ "reason": e.to_string() }),
        ),
    }
}
