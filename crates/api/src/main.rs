use std::sync::Arc;

use anyhow::Context;

use movies_api::config::ServerConfig;
use movies_infra::InMemoryMovieStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    movies_observability::init();

    let config = ServerConfig::default();
    let app = movies_api::app::build_app(Arc::new(InMemoryMovieStore::seeded()));

    // Failing to bind is the one condition that stops the process.
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
