pub mod analysis;
pub mod audit;
pub mod config;
pub mod credentials;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod import;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::json;

use crate::{
    routes::{create_api_router, doc::scalar_docs, health},
    state::AppState,
};

/// Routes and state without the transport layers added in `main`.
pub fn build_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(scalar_docs())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<serde_json::Value>) {
    let body = json!({ "error": "Not Found", "path": uri.path() });
    (StatusCode::NOT_FOUND, Json(body))
}
