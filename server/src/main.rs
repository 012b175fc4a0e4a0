mod config;
mod routes;
mod state;

use records::{DateFormat, seed};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("ignoring .env: {error}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    let state = state::AppState::new(seed::demo(), DateFormat::Iso, config);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sitedeck listening");
    axum::serve(listener, app).await.expect("server failed");
}
