use std::fs;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

const INDEX: &str = "<!DOCTYPE html><title>Habit Tracker</title>";

fn dist_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("client.js"), "console.log('habits');").unwrap();
    dir
}

fn config_for(dir: PathBuf) -> Config {
    Config::from_lookup(|key| (key == "CLIENT_DIST_DIR").then(|| dir.display().to_string())).unwrap()
}

async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let dir = dist_dir();
    let (status, _) = get_path(app(&config_for(dir.path().to_path_buf())), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let dir = dist_dir();
    let (status, body) = get_path(app(&config_for(dir.path().to_path_buf())), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn static_asset_is_served_as_is() {
    let dir = dist_dir();
    let (status, body) = get_path(app(&config_for(dir.path().to_path_buf())), "/client.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('habits');");
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = dist_dir();
    for path in ["/dashboard", "/profile", "/register", "/no/such/page"] {
        let (status, body) = get_path(app(&config_for(dir.path().to_path_buf())), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body, INDEX, "{path}");
    }
}
