use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Extension, Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::AppError, middleware::request_id::RequestId, models::reset_event::ResetEventRecord,
    state::AppState,
};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoggedResponse {
    pub status: &'static str,
}

/// Records a password reset event.
///
/// Any parseable JSON body is accepted; `email` and `resetTime` are only
/// pulled out for structured log fields and are not required. Bodies that
/// cannot be buffered (over the router's body limit) come back as JSON errors.
pub async fn log_password_reset(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<LoggedResponse>, AppError> {
    let body = body?;
    let payload: Value = serde_json::from_slice(&body)?;
    let record = ResetEventRecord::new(payload, request_id.map(|Extension(id)| id.0));

    tracing::debug!(
        email = record.email().unwrap_or("-"),
        reset_time = record.reset_time().unwrap_or("-"),
        "Received password reset event"
    );
    state.reset_event_sink.record(&record).await?;

    Ok(Json(LoggedResponse { status: "logged" }))
}
