use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passreset_backend::{
    config::Config,
    services::reset_event_log::{JsonLinesSink, ResetEventSink, TracingSink},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "passreset_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        reset_event_log_path = ?config.reset_event_log_path,
        "Loaded configuration from environment/.env"
    );

    let sink: Arc<dyn ResetEventSink> = match config.reset_event_log_path {
        Some(path) => Arc::new(JsonLinesSink::new(path)),
        None => Arc::new(TracingSink),
    };

    let addr = config.bind_addr;
    let app = passreset_backend::router(AppState::new(sink));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
