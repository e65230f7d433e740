use std::sync::Arc;

use crate::services::reset_event_log::ResetEventSink;

#[derive(Clone)]
pub struct AppState {
    pub reset_event_sink: Arc<dyn ResetEventSink>,
}

impl AppState {
    pub fn new(reset_event_sink: Arc<dyn ResetEventSink>) -> Self {
        Self { reset_event_sink }
    }
}
