use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::time::to_iso8601;

/// Body sent to the reset-event logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetEventPayload {
    pub email: String,
    pub reset_time: String,
}

impl ResetEventPayload {
    pub fn new(email: impl Into<String>, reset_time: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            reset_time: to_iso8601(reset_time),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResetResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn reset_event_payload_uses_camel_case_and_iso_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let payload = ResetEventPayload::new("a@b.com", at);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "a@b.com",
                "resetTime": "2024-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn api_error_tolerates_missing_code() {
        let err: ApiError = serde_json::from_str(r#"{"error":"Invalid payload"}"#).unwrap();
        assert_eq!(err.error, "Invalid payload");
        assert!(err.code.is_empty());
        assert_eq!(err.to_string(), "Invalid payload");
    }
}
