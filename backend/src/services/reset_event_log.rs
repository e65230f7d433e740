use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};

use crate::models::reset_event::ResetEventRecord;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to serialize reset event: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write reset event: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for received password reset events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResetEventSink: Send + Sync {
    async fn record(&self, event: &ResetEventRecord) -> Result<(), SinkError>;
}

/// Emits each event as a structured `info` record on the `reset_event` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl ResetEventSink for TracingSink {
    async fn record(&self, event: &ResetEventRecord) -> Result<(), SinkError> {
        tracing::info!(
            target: "reset_event",
            request_id = event.request_id.as_deref().unwrap_or("-"),
            received_at = %event.received_at,
            payload = %event.payload,
            "Password reset event logged"
        );
        Ok(())
    }
}

/// Appends each event as one JSON object per line.
#[derive(Debug)]
pub struct JsonLinesSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ResetEventSink for JsonLinesSink {
    async fn record(&self, event: &ResetEventRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        tracing::debug!(path = %self.path.display(), "Appended reset event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn tracing_sink_accepts_any_payload() {
        let sink = TracingSink;
        let record = ResetEventRecord::new(json!("just a string"), None);
        sink.record(&record).await.expect("record");
    }

    #[tokio::test]
    async fn json_lines_sink_appends_one_line_per_event() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("events.jsonl");
        let sink = JsonLinesSink::new(&path);

        let first = ResetEventRecord::new(json!({ "email": "a@b.com" }), Some("req-1".into()));
        let second = ResetEventRecord::new(json!({ "email": "c@d.com" }), None);
        sink.record(&first).await.expect("first");
        sink.record(&second).await.expect("second");

        let contents = tokio::fs::read_to_string(&path).await.expect("read");
        let lines: Vec<Value> = contents
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["payload"]["email"], "a@b.com");
        assert_eq!(lines[0]["request_id"], "req-1");
        assert_eq!(lines[1]["payload"]["email"], "c@d.com");
        assert!(lines[1]["request_id"].is_null());
        assert!(lines[1]["received_at"].is_string());
    }

    #[tokio::test]
    async fn json_lines_sink_reports_io_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = JsonLinesSink::new(dir.path().join("missing").join("events.jsonl"));
        let record = ResetEventRecord::new(json!({}), None);
        let err = sink.record(&record).await.expect_err("should fail");
        assert!(matches!(err, SinkError::Io(_)));
    }
}
