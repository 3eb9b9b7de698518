use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use sprout_gemini::client::GeminiClient;
use sprout_server::build_router;
use sprout_server::config::ServerConfig;
use sprout_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env();

    let gemini = GeminiClient::from_env().map(Arc::new);
    match &gemini {
        Some(client) => {
            tracing::info!(model = client.model(), "generative model configured");
        }
        None => {
            tracing::info!("no API key configured, heuristic fallback serves all requests");
        }
    }

    let state = AppState {
        gemini,
        port: config.port,
    };
    let app = build_router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
