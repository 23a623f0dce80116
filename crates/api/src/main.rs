use std::sync::Arc;

use anyhow::Context;

use halflife_api::app::{build_app, services::AppServices};
use halflife_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("invalid configuration")?;
    halflife_observability::init_with(config.log_format);

    let services = Arc::new(AppServices::from_csv(&config.data_path, config.csv_delimiter));

    if config.eager_load {
        let table = services
            .table()
            .with_context(|| format!("failed to load {}", config.data_path.display()))?;
        tracing::info!(rows = table.len(), "dataset preloaded");
    } else {
        tracing::info!(path = %config.data_path.display(), "dataset will load on first request");
    }

    let app = build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
