mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env().expect("invalid configuration");
    if !config.client_dist_dir.join("index.html").is_file() {
        tracing::warn!(dir = %config.client_dist_dir.display(), "client build not found; run trunk build in client/");
    }

    let app = routes::app(&config);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, dist = %config.client_dist_dir.display(), "habit-tracker listening");
    axum::serve(listener, app).await.expect("server failed");
}
