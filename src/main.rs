use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wdaudiolex::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wdaudiolex=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        language_info = %config.language_info_url,
        sparql = %config.sparql_url,
        "upstreams configured"
    );

    let state = Arc::new(AppState::new(&config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
