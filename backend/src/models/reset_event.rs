use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A received password reset event, as handed to a sink.
///
/// The payload is kept as an arbitrary JSON value: the logger does not
/// enforce the shape the form sends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetEventRecord {
    pub received_at: DateTime<Utc>,
    pub request_id: Option<String>,
    pub payload: Value,
}

impl ResetEventRecord {
    pub fn new(payload: Value, request_id: Option<String>) -> Self {
        Self {
            received_at: Utc::now(),
            request_id,
            payload,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.payload.get("email").and_then(Value::as_str)
    }

    pub fn reset_time(&self) -> Option<&str> {
        self.payload.get("resetTime").and_then(Value::as_str)
    }
}
