use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_explorer::{
    api::{create_router, AppState},
    config::Config,
    store::Snapshot,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Both tables are loaded once and shared read-only for the process lifetime
    let snapshot = Snapshot::load(&config.movies_path, &config.similar_movies_path)
        .with_context(|| {
            format!(
                "Failed to load snapshots from {} and {}",
                config.movies_path, config.similar_movies_path
            )
        })?;

    let state = AppState::from_config(&config, snapshot);
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
