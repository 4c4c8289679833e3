mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "mentutor host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    tracing::info!(api_base = %config.api.base_url, "remote API configured");

    let app = routes::app(&config)?;
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "mentutor listening");
    axum::serve(listener, app).await?;
    Ok(())
}
