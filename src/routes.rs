//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host only serves the built single-page client. Any path that is not a
//! file under the dist directory gets `index.html`, so client routes such as
//! `/dashboard` survive a full page reload. The REST API lives elsewhere.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub fn app(config: &Config) -> Router {
    let index = config.client_dist_dir.join("index.html");
    let spa = ServeDir::new(&config.client_dist_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
