pub mod api;
pub mod docs;
pub mod health;
pub mod root;

use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Router,
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::error::{kind::NotFound, AppError};

pub fn app() -> NormalizePath<Router<()>> {
    NormalizePathLayer::trim_trailing_slash().layer(router())
}
pub fn router() -> Router<()> {
    Router::new()
        .route("/", get(root::root))
        .nest("/health", health::route_health())
        .route("/healthz", get(health::health))
        .route("/docs", get(docs::docs))
        .nest("/api/v1", api::route_api())
        .fallback(not_found)
}

pub async fn not_found(uri: Uri) -> AppError<NotFound, String> {
    AppError::new(StatusCode::NOT_FOUND, uri.path().to_string())
}
