use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::services::reset_event_log::SinkError;

const INVALID_PAYLOAD_MESSAGE: &str = "Invalid payload";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Request body could not be parsed as JSON. Serialized with the bare
    /// `{"error": "Invalid payload"}` shape callers rely on.
    InvalidPayload(serde_json::Error),
    /// Request body could not be buffered, usually because it exceeds the
    /// body limit. Keeps the rejection's status code.
    BodyRejected(BytesRejection),
    NotFound(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidPayload(err) => {
                tracing::warn!(error = %err, "Rejected password reset payload");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": INVALID_PAYLOAD_MESSAGE })),
                )
                    .into_response()
            }
            AppError::BodyRejected(rejection) => {
                let status = rejection.status();
                tracing::warn!(%status, error = %rejection.body_text(), "Rejected request body");
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PAYLOAD_TOO_LARGE"
                } else {
                    "INVALID_BODY"
                };
                (
                    status,
                    Json(ErrorResponse {
                        error: INVALID_PAYLOAD_MESSAGE.to_string(),
                        code: code.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: msg,
                    code: "NOT_FOUND".to_string(),
                }),
            )
                .into_response(),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: "INTERNAL_SERVER_ERROR".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidPayload(err)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::BodyRejected(rejection)
    }
}

impl From<SinkError> for AppError {
    fn from(err: SinkError) -> Self {
        AppError::InternalServerError(err.into())
    }
}
