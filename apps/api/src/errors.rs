use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::analysis::schema::SchemaMismatch;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad gateway: {message}")]
    BadGateway {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Upstream rejected the call; status and body are relayed as-is.
    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, body } => AppError::Upstream { status, body },
            LlmError::Http(e) => AppError::BadGateway {
                message: format!("OpenAI request failed: {e}"),
                source: Box::new(e),
            },
        }
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        let message = err.to_string();
        AppError::BadGateway {
            message,
            source: Box::new(err),
        }
    }
}

impl From<SchemaMismatch> for AppError {
    fn from(err: SchemaMismatch) -> Self {
        AppError::BadGateway {
            message: err.to_string(),
            source: Box::new(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::BadGateway { message, source } => {
                tracing::error!("Bad gateway: {message}: {source}");
                (StatusCode::BAD_GATEWAY, message)
            }
            AppError::Upstream { status, body } => {
                tracing::warn!("Upstream returned {status}: {body}");
                // Non-HTTP codes from a misbehaving upstream still surface as a gateway failure.
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, body)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
