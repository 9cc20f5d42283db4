mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod validation;

use config::Config;
use state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::connect(&config.database_url, config.max_connections).await?;
    db::init_schema(&pool).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    let app = routes::router(AppState { pool });

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
