mod config;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendtrackr_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    if !config.ocr_configured() {
        tracing::warn!("OCR_SPACE_API_KEY not set; /api/analyze will return errors");
    }
    if !config.gmail_configured() || !config.recipient_configured() {
        tracing::warn!("email not fully configured; /api/send-email will return errors");
    }

    let bind = config.bind;
    let state = AppState::from_config(config)?;
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %bind, "spendtrackr server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
