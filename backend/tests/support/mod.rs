#![allow(dead_code)]
use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use passreset_backend::{
    models::reset_event::ResetEventRecord,
    services::reset_event_log::{ResetEventSink, SinkError},
    state::AppState,
};
use std::sync::{Arc, Mutex};

/// Keeps every recorded event in memory so tests can inspect them.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<ResetEventRecord>>,
}

impl MemorySink {
    pub fn events(&self) -> Vec<ResetEventRecord> {
        self.events.lock().expect("lock events").clone()
    }
}

#[async_trait]
impl ResetEventSink for MemorySink {
    async fn record(&self, event: &ResetEventRecord) -> Result<(), SinkError> {
        self.events.lock().expect("lock events").push(event.clone());
        Ok(())
    }
}

pub fn test_app(sink: Arc<dyn ResetEventSink>) -> Router {
    passreset_backend::router(AppState::new(sink))
}

pub fn memory_app() -> (Router, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::default());
    (test_app(sink.clone()), sink)
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}
