use axum::{
    routing::{any, get},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::upstream::UpstreamClient;

/// Конфигурация всех роутов приложения
///
/// - `/health` - жив ли сам сервер
/// - `/api/*` - во внешний сервис генерации
/// - остальное - собранный фронтенд; неизвестные пути получают `index.html`,
///   чтобы клиентские маршруты (`/generate`, `/learning-path/:id`) переживали перезагрузку
pub fn configure_routes(upstream: UpstreamClient, static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api", any(handlers::api_proxy::forward))
        .route("/api/*path", any(handlers::api_proxy::forward))
        .with_state(upstream)
        .fallback_service(spa)
}
