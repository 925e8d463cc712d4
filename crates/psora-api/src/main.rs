use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use psora_api::config::{ApiConfig, LogFormat};
use psora_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ApiConfig::from_env()?;

    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .pretty()
            .init(),
    }

    let state = AppState::from_config(&config).wrap_err("failed to load report template")?;
    let app = psora_api::router(state).layer(config.cors_layer());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "psora-api listening");

    axum::serve(listener, app).await?;
    Ok(())
}
