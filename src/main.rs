mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::SiteError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "aossie-site stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), SiteError> {
    let config = SiteConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| SiteError::Bind { addr, source })?;

    tracing::info!(%addr, "aossie-site listening");
    axum::serve(listener, app).await.map_err(SiteError::Serve)
}
