mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app(config.leptos_options.clone());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|source| HostError::Bind { addr: config.addr, source })?;

    tracing::info!(
        addr = %config.addr,
        site_root = %config.leptos_options.site_root,
        "recipe frontend listening"
    );
    axum::serve(listener, app).await.map_err(HostError::Serve)?;
    Ok(())
}
