use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_catalog::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use event_catalog::shell::config::Config;
use event_catalog::shell::http::router;
use event_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let event_store = Arc::new(InMemoryEventStore::seeded());
    let app = router(AppState::in_memory(event_store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Event Catalog API: http://{}/", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
