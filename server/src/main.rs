#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = config::Config::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        api = %config.api_upstream,
        identity = %config.identity_upstream,
        cookie_secure = config.cookie_secure,
        "upstreams configured"
    );

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "loanlink listening");
    axum::serve(listener, app).await.expect("server failed");
}
